use clap::Parser;
use zosmf_bridge::config::cli::{Cli, CliCommand};
use zosmf_bridge::domain::model::{DatasetEntry, ListOptions, MemberEntry, UssItem};
use zosmf_bridge::utils::validation::{
    self, validate_dataset_name, validate_member_name, Validate,
};
use zosmf_bridge::utils::logger;
use zosmf_bridge::{
    CommandAdapter, CommandApi, CommonApi, ConnectionProfile, JesAdapter, JesApi, MvsAdapter,
    MvsApi, UssAdapter, UssApi,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting zosmf-bridge CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let profile = match ConnectionProfile::from_file(&cli.profile) {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("❌ Could not load profile {}: {}", cli.profile.display(), e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = profile.validate() {
        tracing::error!("❌ Profile validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli.command, profile).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            zosmf_bridge::utils::error::ErrorSeverity::Low => 0,
            zosmf_bridge::utils::error::ErrorSeverity::Medium => 2,
            zosmf_bridge::utils::error::ErrorSeverity::High => 1,
            zosmf_bridge::utils::error::ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(command: &CliCommand, profile: ConnectionProfile) -> zosmf_bridge::Result<()> {
    match command {
        CliCommand::Status => {
            let adapter = UssAdapter::new(profile);
            let status = adapter.status("zosmf").await?;
            println!("✅ Connection status: {}", status);
        }
        CliCommand::UssList { path } => {
            let adapter = UssAdapter::new(profile);
            let response = adapter.file_list(path).await?;
            for item in response.items::<UssItem>()? {
                let marker = if item.is_directory() { "/" } else { "" };
                println!("{}{}\t{}", item.name, marker, item.size.unwrap_or(0));
            }
        }
        CliCommand::DsList { filter } => {
            let adapter = MvsAdapter::new(profile);
            let options = ListOptions {
                attributes: Some("base".to_string()),
                ..Default::default()
            };
            let response = adapter.data_set(filter, &options).await?;
            for entry in response.items::<DatasetEntry>()? {
                println!(
                    "{}\t{}\t{}",
                    entry.dsname,
                    entry.dsorg.as_deref().unwrap_or("-"),
                    entry.vol.as_deref().unwrap_or("-")
                );
            }
        }
        CliCommand::Members { dataset } => {
            validate_dataset_name("dataset", dataset)?;
            let adapter = MvsAdapter::new(profile);
            let response = adapter.all_members(dataset, &ListOptions::default()).await?;
            for member in response.items::<MemberEntry>()? {
                println!("{}", member.member);
            }
        }
        CliCommand::Jobs { owner, prefix } => {
            let adapter = JesAdapter::new(profile);
            let jobs = adapter.jobs_by_owner_and_prefix(owner, prefix).await?;
            for job in jobs {
                println!(
                    "{}\t{}\t{}\t{}",
                    job.jobid,
                    job.jobname,
                    job.status.as_deref().unwrap_or("-"),
                    job.retcode.as_deref().unwrap_or("-")
                );
            }
        }
        CliCommand::Spool {
            jobname,
            jobid,
            spool_id,
        } => {
            let adapter = JesAdapter::new(profile);
            let content = adapter.spool_content_by_id(jobname, jobid, *spool_id).await?;
            println!("{}", content);
        }
        CliCommand::Submit { dataset } => {
            let (dsn, member) = match dataset.split_once('(') {
                Some((dsn, member)) => (dsn, Some(member.trim_end_matches(')'))),
                None => (dataset.as_str(), None),
            };
            validate_dataset_name("dataset", dsn)?;
            if let Some(member) = member {
                validate_member_name("dataset", member)?;
            }
            let adapter = JesAdapter::new(profile);
            let job = adapter.submit_job(dataset).await?;
            println!("✅ Submitted {} as {}", job.jobname, job.jobid);
        }
        CliCommand::Console { command } => {
            validation::validate_non_empty_string("command", command)?;
            let adapter = CommandAdapter::new(profile);
            let response = adapter.issue_mvs_command(command).await?;
            println!("{}", response.command_response);
        }
    }
    Ok(())
}
