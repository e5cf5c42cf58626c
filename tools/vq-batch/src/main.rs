//! Batch driver: train all six codebooks, then evaluate both codecs on every
//! test image.

mod corpus;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use vq::consts::{
    DEFAULT_CHROMA_CODEBOOK_SIZE, DEFAULT_KMEANS_ITERATIONS, DEFAULT_LUMA_CODEBOOK_SIZE,
    DEFAULT_RGB_CODEBOOK_SIZE, DEFAULT_RGB_IMAGES_PER_CATEGORY,
};
use vq::{
    add_image_to_sets, io, ChannelSelector, Codebook, Comparison, ImageCodec, KMeansConfig,
    RgbCodec, RgbImage, TrainingSet, Winner, YuvCodec,
};

#[derive(Parser, Debug)]
#[command(name = "vq-batch")]
#[command(about = "Train VQ codebooks and compare the RGB and YUV codecs", long_about = None)]
struct Cli {
    /// Folder of training categories
    #[arg(long, default_value = "training")]
    training: PathBuf,

    /// Folder of test categories
    #[arg(long, default_value = "test")]
    test: PathBuf,

    /// Where codebooks are written to or read from
    #[arg(long, default_value = "codebooks")]
    codebooks: PathBuf,

    /// Where reconstructed images are written
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// Seed for codebook initialization (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Images sampled from each training category for the RGB codebooks
    #[arg(long, default_value_t = DEFAULT_RGB_IMAGES_PER_CATEGORY)]
    rgb_images_per_category: usize,

    /// Size of each RGB codebook
    #[arg(long, default_value_t = DEFAULT_RGB_CODEBOOK_SIZE)]
    rgb_codebook_size: usize,

    /// Size of the Y codebook
    #[arg(long, default_value_t = DEFAULT_LUMA_CODEBOOK_SIZE)]
    y_codebook_size: usize,

    /// Size of the U and V codebooks
    #[arg(long, default_value_t = DEFAULT_CHROMA_CODEBOOK_SIZE)]
    uv_codebook_size: usize,

    /// K-means rounds per codebook
    #[arg(long, default_value_t = DEFAULT_KMEANS_ITERATIONS)]
    iterations: usize,

    /// Load existing codebooks instead of training new ones
    #[arg(long)]
    reuse_codebooks: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn codebook_file(selector: ChannelSelector) -> &'static str {
    match selector {
        ChannelSelector::R => "redCB.txt",
        ChannelSelector::G => "greenCB.txt",
        ChannelSelector::B => "blueCB.txt",
        ChannelSelector::Y => "yCB.txt",
        ChannelSelector::U => "uCB.txt",
        ChannelSelector::V => "vCB.txt",
    }
}

/// Decode an image, logging and skipping anything unreadable
fn load_or_skip(path: &Path) -> Option<RgbImage> {
    match io::load_image(path) {
        Ok(image) => Some(image),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read image, skipping");
            None
        }
    }
}

/// Feed every readable file to each training set
fn fill_training_sets(files: &[PathBuf], sets: &mut [TrainingSet]) -> Result<()> {
    for path in files {
        let Some(image) = load_or_skip(path) else {
            continue;
        };
        add_image_to_sets(&image, sets)
            .with_context(|| format!("sampling {}", path.display()))?;
    }
    Ok(())
}

fn train_codebooks(
    cli: &Cli,
    rng: &mut StdRng,
    selectors: [ChannelSelector; 3],
    files: &[PathBuf],
    k: [usize; 3],
) -> Result<[Codebook; 3]> {
    let mut sets = selectors.map(TrainingSet::new);
    fill_training_sets(files, &mut sets)?;

    let mut codebooks = Vec::with_capacity(3);
    for (set, k) in sets.iter().zip(k) {
        let config = KMeansConfig::new(k).iterations(cli.iterations);
        let (codebook, report) = set
            .train(config, rng)
            .with_context(|| format!("training the {} codebook", set.selector()))?;
        info!(
            channel = %set.selector(),
            distortion = ?report.final_distortion(),
            "codebook trained"
        );
        let path = cli.codebooks.join(codebook_file(set.selector()));
        codebook
            .save(&path)
            .with_context(|| format!("saving {}", path.display()))?;
        codebooks.push(codebook);
    }
    codebooks
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected three codebooks"))
}

fn load_codebooks(dir: &Path, selectors: [ChannelSelector; 3]) -> Result<[Codebook; 3]> {
    let load = |selector| {
        let path = dir.join(codebook_file(selector));
        Codebook::load(&path).with_context(|| format!("loading {}", path.display()))
    };
    Ok([
        load(selectors[0])?,
        load(selectors[1])?,
        load(selectors[2])?,
    ])
}

fn output_name(path: &Path, extension: &str) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default();
    PathBuf::from(stem).with_extension(extension)
}

struct Evaluation {
    rgb_dir: PathBuf,
    yuv_dir: PathBuf,
}

impl Evaluation {
    fn new(output: &Path) -> Result<Self> {
        let rgb_dir = output.join("decoded_rgb");
        let yuv_dir = output.join("yuv_decoded");
        fs::create_dir_all(&rgb_dir)?;
        fs::create_dir_all(&yuv_dir)?;
        Ok(Self { rgb_dir, yuv_dir })
    }

    fn run(&self, path: &Path, image: &RgbImage, rgb: &RgbCodec, yuv: &YuvCodec) -> Result<()> {
        let rgb_out = rgb.process(image).context("RGB codec")?;
        io::save_image(&rgb_out.reconstructed, self.rgb_dir.join(output_name(path, "png")))
            .context("saving RGB reconstruction")?;
        println!(
            "   [RGB VQ] PSNR: {:.2} dB (R {:.2}, G {:.2}, B {:.2})",
            rgb_out.mean_psnr(),
            rgb_out.psnr[0],
            rgb_out.psnr[1],
            rgb_out.psnr[2]
        );
        println!(
            "   RGB VQ Compression Ratio: {:.2}",
            rgb_out.compression_ratio()
        );

        let yuv_out = yuv.process(image).context("YUV codec")?;
        io::save_image(&yuv_out.reconstructed, self.yuv_dir.join(output_name(path, "jpg")))
            .context("saving YUV reconstruction")?;
        println!("   [YUV VQ] PSNR: {:.2} dB", yuv_out.mean_psnr());
        println!(
            "   YUV VQ Compression Ratio: {:.2}",
            yuv_out.compression_ratio()
        );

        let cmp = Comparison::between(rgb_out.compression_ratio(), yuv_out.compression_ratio());
        println!("   RGB/YUV Ratio: {:.2}", cmp.relative());
        match cmp.winner() {
            Winner::Rgb => println!(
                "   => RGB VQ compresses better by a factor of {:.2}",
                cmp.factor()
            ),
            Winner::Yuv => println!(
                "   => YUV VQ compresses better by a factor of {:.2}",
                cmp.factor()
            ),
            Winner::Tie => println!("   => Both methods compress equally."),
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .init();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (rgb_books, yuv_books) = if cli.reuse_codebooks {
        info!(dir = %cli.codebooks.display(), "loading codebooks");
        (
            load_codebooks(&cli.codebooks, ChannelSelector::RGB)?,
            load_codebooks(&cli.codebooks, ChannelSelector::YUV)?,
        )
    } else {
        fs::create_dir_all(&cli.codebooks)?;

        info!("generating RGB codebooks");
        let files = corpus::rgb_training_files(&cli.training, cli.rgb_images_per_category)?;
        let rgb_books = train_codebooks(
            &cli,
            &mut rng,
            ChannelSelector::RGB,
            &files,
            [cli.rgb_codebook_size; 3],
        )?;

        info!("generating YUV codebooks");
        let files = corpus::yuv_training_files(&cli.training)?;
        let yuv_books = train_codebooks(
            &cli,
            &mut rng,
            ChannelSelector::YUV,
            &files,
            [cli.y_codebook_size, cli.uv_codebook_size, cli.uv_codebook_size],
        )?;
        (rgb_books, yuv_books)
    };

    let [r, g, b] = rgb_books;
    let rgb = RgbCodec::new(r, g, b);
    let [y, u, v] = yuv_books;
    let yuv = YuvCodec::new(y, u, v)?;

    info!("processing test images");
    let evaluation = Evaluation::new(&cli.output)?;
    for (category, files) in corpus::test_files(&cli.test)? {
        println!("-> Category: {category}");
        for path in files {
            println!(" * Image: {}", path.display());
            let Some(image) = load_or_skip(&path) else {
                continue;
            };
            if let Err(e) = evaluation.run(&path, &image, &rgb, &yuv) {
                warn!(path = %path.display(), error = ?e, "image failed, skipping");
            }
        }
    }

    info!("all done");
    Ok(())
}
