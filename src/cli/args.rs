use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct NewtonFractalArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Classify every grid point and optionally write a bitmap.
    Render(RenderArgs),
    /// Print the image dimensions implied by a parameter file.
    Geometry(GeometryArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Parameter file: classic coefficient text format, or `.json`.
    pub params_path: String,

    /// Write a 24-bit bitmap of the classification to this path.
    #[clap(long = "image", short = 'g')]
    pub image_path: Option<String>,
}

#[derive(Debug, Args)]
pub struct GeometryArgs {
    pub params_path: String,
}
