use crate::core::file_io::RenderParams;

/// Dry run: report the image dimensions a parameter file would produce,
/// without classifying anything.
pub fn print_geometry(params: &RenderParams) {
    let geometry = params.region.image_geometry();
    println!("width:       {} pixels", geometry.width);
    println!("height:      {} pixels", geometry.height);
    println!("row padding: {} bytes", geometry.padding);
    println!("file size:   {} bytes", geometry.file_size());
}
