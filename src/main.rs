use anyhow::Result;
use frontier_armory::{
    catalog::scan_category,
    cli::{Cli, Commands},
    config::resolve_database_path,
    logging::init_logging,
    schema::table_names,
    server::serve,
    writer::{create_schema, seed_database},
};
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Serve(args) => {
            init_logging(args.log_json);
            let database = resolve_database_path(args.database.clone())?;
            let config = args.into_config(database);

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(serve(config))?;
        }

        Commands::Init { output_db } => {
            init_logging(false);
            create_schema(&output_db)?;
            println!("Created empty database {:?}", output_db);
        }

        Commands::Import {
            input_dir,
            output_db,
        } => {
            init_logging(false);
            let start = Instant::now();

            let record_count = seed_database(&input_dir, &output_db)?;

            let elapsed = start.elapsed();
            println!(
                "\nCreated {:?} ({} records) in {:.1}s",
                output_db,
                record_count,
                elapsed.as_secs_f64()
            );
        }

        Commands::ListTables => {
            println!("Available tables:\n");
            for name in table_names() {
                println!("  {}", name);
            }
        }

        Commands::ListCategory {
            category,
            static_root,
        } => {
            let entries = scan_category(&static_root, category)?;
            println!("{} ({} weapons):\n", category.title(), entries.len());
            for entry in entries {
                println!("  {:<30} {}", entry.display_name, entry.filename);
            }
        }
    }

    Ok(())
}
