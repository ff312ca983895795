// Entry point and menu flow.
//
// The pipeline (load → resolve columns → clean → aggregate) runs exactly
// once, before the menu appears; every menu option reads the precomputed
// summary. Fatal errors (unreadable file, missing date/time columns)
// print a diagnostic and exit before the menu is ever shown.
use clap::Parser;
use collision_viewer::cleaner::{self, CleanReport};
use collision_viewer::stats::CrashSummary;
use collision_viewer::util::format_int;
use collision_viewer::{charts, loader, output, schema};
use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// NYC motor vehicle collision statistics viewer.
#[derive(Parser, Debug)]
#[command(about = "Loads a year of collision records and serves summary statistics from a text menu")]
struct Args {
    /// Path to the collision CSV export.
    #[arg(default_value = "Motor_Vehicle_Collisions_-_Crashes_20251212.csv")]
    file: PathBuf,
}

// Logging goes to stderr and defaults to `warn` so the menu stays clean;
// RUST_LOG surfaces the pipeline's info/debug events.
fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();
}

fn build_summary(path: &Path) -> Result<(CrashSummary, CleanReport), Box<dyn Error>> {
    let table = loader::load_raw(path)?;
    let cols = schema::resolve_columns(&table.headers)?;
    if !cols.vehicle_type.is_present() {
        info!("no vehicle type column in source; vehicle statistics disabled");
    }
    let (records, report) = cleaner::clean(&table, &cols);
    info!(
        kept = report.kept_rows,
        dropped = report.dropped_rows,
        "dataset cleaned"
    );
    Ok((CrashSummary::compute(&records), report))
}

fn show_menu() {
    println!("\n---------------------------------------");
    println!(" NYC Collision Data Viewer (2024)");
    println!("---------------------------------------");
    println!("Choose what data you want to view:");
    println!("1. Total collisions");
    println!("2. Total persons injured");
    println!("3. Total persons killed");
    println!("4. Month with most accidents");
    println!("5. Top 5 most dangerous streets");
    println!("6. Most common vehicle type involved");
    println!("7. Monthly accident trend (line chart)");
    println!("8. Vehicle types ranking (line chart)");
    println!("9. Top 3 most common vehicle types (numbers)");
    println!("10. Top 3 most common vehicle types (bar chart)");
    println!("11. Monthly accident counts (table)");
    println!("12. Exit");
    println!("---------------------------------------");
}

/// Read a single line of input after printing the selection prompt.
fn read_choice() -> String {
    print!("Enter your choice (1-12): ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf.trim().to_string()
}

/// Report a finished chart render: print where it landed and hand it to
/// the system image viewer. Both failure paths return to the menu.
fn show_chart(result: Result<PathBuf, Box<dyn Error>>) {
    match result {
        Ok(path) => {
            println!("Chart saved to {}", path.display());
            if let Err(e) = open::that(&path) {
                println!("Could not open the chart viewer: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to render chart: {}", e),
    }
}

fn run_menu(summary: &CrashSummary) {
    loop {
        show_menu();
        match read_choice().as_str() {
            "1" => println!(
                "\nTotal collisions in 2024: {}",
                format_int(summary.total_crashes)
            ),
            "2" => println!(
                "\nTotal persons injured in 2024: {}",
                format_int(summary.total_injured)
            ),
            "3" => println!(
                "\nTotal persons killed in 2024: {}",
                format_int(summary.total_killed)
            ),
            "4" => {
                let (name, count) = summary.peak();
                println!("\nPeak month: {} ({} accidents)", name, format_int(count));
            }
            "5" => {
                println!("\nTop 5 most dangerous streets:");
                if summary.street_counts.is_empty() {
                    println!("No street data available.");
                } else {
                    output::print_table(&summary.street_rows());
                }
            }
            "6" => {
                let (vehicle, count) = &summary.most_common_vehicle;
                println!("\nMost common vehicle type involved in collisions:");
                println!("{} ({} collisions)", vehicle, format_int(*count));
            }
            "7" => {
                println!("\nGenerating monthly accident trend plot...");
                show_chart(charts::render_monthly_trend(&summary.monthly_counts));
            }
            "8" => {
                println!("\nGenerating vehicle types ranking plot...");
                if summary.vehicle_type_counts.is_empty() {
                    println!("No vehicle type data available.");
                } else {
                    show_chart(charts::render_vehicle_ranking(&summary.vehicle_ranking()));
                }
            }
            "9" => {
                println!("\nTop 3 most common vehicle types (numbers):");
                if summary.top_3_vehicles.is_empty() {
                    println!("No vehicle type data available.");
                } else {
                    output::print_table(&summary.vehicle_rows());
                }
            }
            "10" => {
                println!("\nTop 3 most common vehicle types (bar chart):");
                if summary.top_3_vehicles.is_empty() {
                    println!("No vehicle type data available.");
                } else {
                    show_chart(charts::render_top_vehicles_bar(&summary.top_3_vehicles));
                }
            }
            "11" => {
                println!("\nMonthly accident counts:");
                output::print_table(&summary.monthly_rows());
            }
            "12" => {
                println!("Exiting program. Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please select a number from 1-12."),
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    println!("Loading 2024 NYC collision data...");
    let (summary, report) = match build_summary(&args.file) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Fatal: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!(
        "Data loaded successfully. Total records: {}",
        format_int(summary.total_crashes)
    );
    let skipped = report.dropped_rows + report.malformed_rows;
    if skipped > 0 {
        println!(
            "Note: {} of {} raw rows skipped (unparseable timestamps or malformed rows).",
            format_int(skipped),
            format_int(report.raw_rows + report.malformed_rows)
        );
    }

    run_menu(&summary);
    ExitCode::SUCCESS
}
