use clap::Parser;
use profile_render::utils::{logger, validation::Validate};
use profile_render::{CliConfig, IoSink, RenderEngine, RenderMode};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

fn run_to_writer<W: Write>(
    mode: RenderMode,
    input: &Path,
    writer: W,
) -> profile_render::Result<usize> {
    let mut engine = RenderEngine::new(IoSink::new(writer));
    let written = engine.run(mode, input)?;
    engine.into_sink().into_inner().flush()?;
    Ok(written)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting profile-render CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let input_path = Path::new(&config.input);

    let result = match &config.output {
        Some(path) => File::create(path)
            .map_err(profile_render::RenderError::from)
            .and_then(|file| run_to_writer(config.mode, input_path, file)),
        None => run_to_writer(config.mode, input_path, io::stdout().lock()),
    };

    match result {
        Ok(written) => {
            tracing::info!("✅ Rendering completed successfully ({} chunks)", written);
            if let Some(path) = &config.output {
                println!("✅ Markup written to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!("❌ Rendering failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
