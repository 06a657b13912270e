use std::path::Path;

use clap::Parser;

use newton_fractal::cli::args::{CommandsEnum, NewtonFractalArgs};
use newton_fractal::cli::geometry::print_geometry;
use newton_fractal::cli::render::render_fractal;
use newton_fractal::core::errors::FractalError;
use newton_fractal::core::file_io::read_render_params;

fn run(args: &NewtonFractalArgs) -> Result<(), FractalError> {
    match &args.command {
        Some(CommandsEnum::Render(params)) => {
            let render_params = read_render_params(Path::new(&params.params_path))?;
            let image_path = params.image_path.as_deref().map(Path::new);
            render_fractal(&render_params, image_path)
        }
        Some(CommandsEnum::Geometry(params)) => {
            let render_params = read_render_params(Path::new(&params.params_path))?;
            print_geometry(&render_params);
            Ok(())
        }
        None => {
            println!("Default command (nothing specified!)");
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();
    let args = NewtonFractalArgs::parse();
    if let Err(error) = run(&args) {
        eprintln!("ERROR: {}", error);
        std::process::exit(1);
    }
}
