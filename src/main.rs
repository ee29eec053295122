use sigbench::console_report;
use sigbench::data_export;
#[cfg(feature = "plots")]
use sigbench::plot_render;
use sigbench::study;

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sigbench")]
#[command(about = "Fourier-series and Bode frequency-response analysis workbench")]
struct Cli {
    /// Run only the Fourier-series study
    #[arg(long)]
    fourier: bool,

    /// Run only the Bode study
    #[arg(long)]
    bode: bool,

    /// Output directory for figures and exported data
    #[arg(long, default_value = "./out")]
    output_dir: PathBuf,

    /// Write manifest + per-study JSON results
    #[arg(long)]
    export_data: bool,

    /// Skip figure rendering
    #[arg(long)]
    no_plots: bool,

    /// Suppress the per-waveform coefficient tables
    #[arg(long)]
    no_table: bool,
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    let cli = Cli::parse();
    let run_fourier = cli.fourier || !cli.bode;
    let run_bode = cli.bode || !cli.fourier;
    let plots_enabled = cfg!(feature = "plots") && !cli.no_plots;

    info!("═══════════════════════════════════════════════");
    info!("  SIGBENCH v{}", env!("CARGO_PKG_VERSION"));
    if run_fourier {
        info!("  Study: Fourier series (4 waveforms)");
    }
    if run_bode {
        info!("  Study: Bode response (7 filters)");
    }
    if plots_enabled || cli.export_data {
        info!("  Output: {:?}", cli.output_dir);
    }
    info!("═══════════════════════════════════════════════");

    if plots_enabled || cli.export_data {
        if let Err(e) = std::fs::create_dir_all(&cli.output_dir) {
            error!("Cannot create output dir {:?}: {}", cli.output_dir, e);
            std::process::exit(1);
        }
    }

    // ─── Fourier study ──────────────────────────────────────────────
    let fourier_results = run_fourier.then(study::run_fourier_study);
    if let Some(analyses) = &fourier_results {
        if !cli.no_table {
            for analysis in analyses {
                console_report::print_coefficient_table(analysis);
            }
        }

        #[cfg(feature = "plots")]
        if plots_enabled {
            for analysis in analyses {
                for run in &analysis.runs {
                    let path = cli.output_dir.join(format!(
                        "fourier_{}_n{:03}.png",
                        analysis.waveform.slug(),
                        run.n_terms
                    ));
                    if let Err(e) = plot_render::render_fourier_figure(analysis, run, &path) {
                        error!("Figure {:?} failed: {}", path, e);
                    }
                }
            }
            info!("Fourier figures rendered → {:?}", cli.output_dir);
        }
    }

    // ─── Bode study ─────────────────────────────────────────────────
    let bode_results = run_bode.then(study::run_bode_study);
    if let Some(analyses) = &bode_results {
        console_report::print_bode_summary(analyses);

        #[cfg(feature = "plots")]
        if plots_enabled {
            for analysis in analyses {
                let path = cli
                    .output_dir
                    .join(format!("bode_h{}.png", analysis.index));
                if let Err(e) = plot_render::render_bode_figure(analysis, &path) {
                    error!("Figure {:?} failed: {}", path, e);
                }
            }
            info!("Bode figures rendered → {:?}", cli.output_dir);
        }
    }

    // ─── Data export ────────────────────────────────────────────────
    if cli.export_data {
        if let Err(e) = data_export::export(
            &cli.output_dir,
            fourier_results.as_deref(),
            bode_results.as_deref(),
        ) {
            error!("Data export failed: {}", e);
        }
    }
}
