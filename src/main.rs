use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use mandel_server::{
    Complex, ComplexRect, HttpServer, ImagePresenterPort, MandelbrotKernel, PngPresenter,
    PpmPresenter, RenderParams, RenderService, ServiceConfig, write_image,
};

#[derive(Parser, Debug)]
#[command(name = "mandel_server", version, about = "Renders and serves Mandelbrot images")]
struct Cli {
    /// Log verbosity
    #[arg(long, default_value = "info", global = true)]
    log_level: LevelFilter,

    /// Render workers; defaults to the number of available CPUs
    #[arg(long, global = true)]
    workers: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve 256x256 PNGs at /{startY}/{startX}/{endY}/{endX}/{maxIterations}
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        addr: String,
    },
    /// Render a single image to a file
    Render {
        #[arg(long, default_value_t = 512)]
        width: u32,
        #[arg(long, default_value_t = 512)]
        height: u32,
        #[arg(long, default_value_t = 32)]
        max_iterations: u32,
        #[arg(long, default_value_t = -2.0, allow_hyphen_values = true)]
        start_x: f64,
        #[arg(long, default_value_t = 2.0, allow_hyphen_values = true)]
        end_x: f64,
        #[arg(long, default_value_t = -2.0, allow_hyphen_values = true)]
        start_y: f64,
        #[arg(long, default_value_t = 2.0, allow_hyphen_values = true)]
        end_y: f64,
        #[arg(long, value_enum, default_value_t = Format::Png)]
        format: Format,
        #[arg(short, long, default_value = "out.png")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Png,
    Ppm,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    TermLogger::init(
        cli.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let config = cli
        .workers
        .map(ServiceConfig::with_workers)
        .unwrap_or_default();

    match cli.command {
        Command::Serve { addr } => {
            let service = Arc::new(RenderService::new(config)?);
            let server = HttpServer::bind(&addr)?;
            server.run(service);
        }
        Command::Render {
            width,
            height,
            max_iterations,
            start_x,
            end_x,
            start_y,
            end_y,
            format,
            output,
        } => {
            let region =
                ComplexRect::new(Complex::new(start_x, start_y), Complex::new(end_x, end_y))?;
            let params = RenderParams::new(width, height, max_iterations, region)?;

            let presenter: Arc<dyn ImagePresenterPort> = match format {
                Format::Png => Arc::new(PngPresenter::new()),
                Format::Ppm => Arc::new(PpmPresenter::new()),
            };
            let service = RenderService::with_parts(config, MandelbrotKernel::new(), presenter)?;

            info!("rendering {width}x{height}, {max_iterations} iterations");
            write_image(&service, params, &output)?;
        }
    }

    Ok(())
}
