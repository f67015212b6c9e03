use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use skin_canvas_rs::logger;
use skin_canvas_rs::texture_pipeline::{
    ImageSource, ModelSelection, TextureConfig, TexturePipeline, TextureTarget,
};

use tracing::info;

/// Normalizes Minecraft skin, cape and ears textures into the canonical
/// canvas layout.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a skin to the square layout
    Skin {
        /// Input file path or http(s) URL
        input: String,
        /// Output PNG path
        output: PathBuf,
        /// auto-detect, default or slim
        #[arg(long, default_value = "auto-detect")]
        model: ModelSelection,
    },
    /// Place a cape on the 64x32 canvas
    Cape {
        input: String,
        output: PathBuf,
    },
    /// Normalize an ears texture
    Ears {
        input: String,
        output: PathBuf,
        /// Cut the ears out of a skin image instead
        #[arg(long)]
        from_skin: bool,
    },
    /// Print the arm model of a skin
    Detect {
        input: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command {
        Command::Skin { input, output, model } => {
            let config = TextureConfig::builder().model(model).build();
            convert(config, TextureTarget::Skin, &input, output)
        }
        Command::Cape { input, output } => {
            convert(TextureConfig::default(), TextureTarget::Cape, &input, output)
        }
        Command::Ears { input, output, from_skin } => {
            let target = if from_skin { TextureTarget::EarsFromSkin } else { TextureTarget::Ears };
            convert(TextureConfig::default(), target, &input, output)
        }
        Command::Detect { input } => {
            let pipeline = TexturePipeline::new(TextureConfig::default())?;
            let skin = pipeline
                .load_skin(&ImageSource::from(input.as_str()))
                .with_context(|| format!("failed to load skin {input}"))?;
            println!("{}", skin.model);
            Ok(())
        }
    }
}

fn convert(config: TextureConfig, target: TextureTarget, input: &str, output: PathBuf) -> anyhow::Result<()> {
    let pipeline = TexturePipeline::new(config)?;
    let processed = pipeline
        .convert_file(target, &ImageSource::from(input), &output)
        .with_context(|| format!("failed to convert {target} {input}"))?;

    match processed.model {
        Some(model) => info!(
            "Wrote {}x{} {} ({} model) to {}",
            processed.width, processed.height, target, model, output.display()
        ),
        None => info!(
            "Wrote {}x{} {} to {}",
            processed.width, processed.height, target, output.display()
        ),
    }
    Ok(())
}
