use exrview_rs::image_pipeline::{ConversionConfig, ExrCompression, ViewerPipeline};
use exrview_rs::logger;

use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();

    info!("Starting exrview...");

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "input.exr".to_string());
    let output = args.next().unwrap_or_else(|| "output.png".to_string());

    let config = ConversionConfig::builder()
        .compression(ExrCompression::Zip)
        .build();
    let pipeline = ViewerPipeline::new(config);

    info!("Viewer pipeline initialized");
    info!("Compression: {:?}", pipeline.config().compression);

    match pipeline.load_file(&input) {
        Ok(bitmap) => {
            info!("Loaded {} ({}x{})", input, bitmap.width, bitmap.height);
            match pipeline.export_file(&bitmap, &output) {
                Ok(_) => info!("Exported to {}", output),
                Err(e) => error!("Export failed: {}", e),
            }
        }
        Err(e) => error!("Load failed: {}", e),
    }

    Ok(())
}
