use clap::Parser;
use read_my_chart::app::briefing::{render_json, render_text};
use read_my_chart::utils::error::{ChartError, ErrorSeverity};
use read_my_chart::utils::{logger, validation::Validate};
use read_my_chart::{ChartEngine, CliConfig};

fn exit_code(e: &ChartError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: ChartError) -> ! {
    tracing::error!(
        "❌ Reading failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

fn main() {
    let cli = CliConfig::parse();

    let file_config = match cli.load_file_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    let verbose = cli.verbose || file_config.verbose();
    if file_config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting read-my-chart");
    tracing::debug!("CLI config: {:?}", cli);

    // Flags may override file values, so only the resolved request is validated.
    let request = cli.resolve(&file_config, chrono::Local::now().naive_local());
    if let Err(e) = request.validate() {
        fail(e);
    }

    let engine = ChartEngine::new(request.options);
    let insights = match engine.read(&request.form) {
        Ok(insights) => insights,
        Err(e) => fail(e),
    };

    let rendered = match request.format.as_str() {
        "json" => render_json(&insights),
        _ => Ok(render_text(&insights)),
    };

    match rendered {
        Ok(output) => {
            println!("{}", output);
            tracing::info!("✅ Reading generated for {}", insights.formatted_date);
        }
        Err(e) => fail(e),
    }
}
