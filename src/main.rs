use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use hookctl::cli::ui;
use hookctl::config::{load_config, ConfigOverrides, HookctlConfig};
use hookctl::hooks::install::{install_git_hooks, InstallOptions};
use hookctl::hooks::status::hook_statuses;
use hookctl::hooks::uninstall::{uninstall_git_hooks, UninstallOptions};

#[derive(Parser)]
#[command(name = "hookctl")]
#[command(version, about = "Install and remove git hooks declared in the project manifest")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install git hooks from package.json
    Install {
        /// Project directory (default: current dir)
        #[arg(default_value = ".")]
        directory: PathBuf,
        /// Treat the environment as CI and skip installation
        #[arg(long)]
        ci: bool,
        /// Write hook files without the generator marker
        #[arg(long)]
        no_tagging: bool,
    },
    /// Remove the git hooks hookctl generated
    Uninstall {
        /// Project directory (default: current dir)
        #[arg(default_value = ".")]
        directory: PathBuf,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show how each hook stands relative to the manifest
    Status {
        /// Project directory (default: current dir)
        #[arg(default_value = ".")]
        directory: PathBuf,
    },
}

fn main() {
    hookctl::observability::init_logging();
    let cli = Cli::parse();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Error: cannot create async runtime: {}", e);
            process::exit(1);
        });

    match cli.command {
        Commands::Install {
            directory,
            ci,
            no_tagging,
        } => {
            let config = load_config(
                &directory,
                ConfigOverrides {
                    ci: ci.then_some(true),
                    tagging: no_tagging.then_some(false),
                },
            );
            cmd_install(&rt, directory, &config);
        }
        Commands::Uninstall { directory, yes } => {
            cmd_uninstall(&rt, directory, yes);
        }
        Commands::Status { directory } => {
            let config = load_config(&directory, ConfigOverrides::default());
            cmd_status(&rt, directory, &config);
        }
    }
}

// ---------------------------------------------------------------------------
// CLI command implementations
// ---------------------------------------------------------------------------

fn cmd_install(rt: &tokio::runtime::Runtime, directory: PathBuf, config: &HookctlConfig) {
    let options = InstallOptions {
        project_dir: directory,
        ci: config.is_ci(),
        tagging: config.tagging,
    };

    let report = rt.block_on(install_git_hooks(&options)).unwrap_or_else(|e| {
        eprintln!("Error: failed to install git hooks: {}", e);
        process::exit(1);
    });

    if options.ci {
        println!("CI environment — no hooks installed.");
    } else {
        ui::print_install_summary(&report);
    }
}

fn cmd_uninstall(rt: &tokio::runtime::Runtime, directory: PathBuf, yes: bool) {
    if !ui::confirm("Remove all hookctl-generated git hooks?", yes) {
        println!("Aborted.");
        return;
    }

    let options = UninstallOptions {
        project_dir: directory,
    };

    let report = rt
        .block_on(uninstall_git_hooks(&options))
        .unwrap_or_else(|e| {
            eprintln!("Error: failed to uninstall git hooks: {}", e);
            process::exit(1);
        });

    ui::print_uninstall_summary(&report);
}

fn cmd_status(rt: &tokio::runtime::Runtime, directory: PathBuf, config: &HookctlConfig) {
    let statuses = rt
        .block_on(hook_statuses(&directory, config.tagging))
        .unwrap_or_else(|e| {
            eprintln!("Error: cannot read hook status: {}", e);
            process::exit(1);
        });

    ui::print_status(&statuses);
}
