use anyhow::{bail, Context};
use meater_client::{ClientError, Credentials, MeaterClient, PublicClient, SessionStore};
use meater_core::Config;
use meater_domain::{Cook, MeatCatalog};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

use crate::cli::{Cli, Command, CooksArgs, HistoryArgs, HistoryFormat};
use crate::output;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        config: config_path,
        session,
        email,
        password,
        command,
        ..
    } = cli;

    let load_config = || -> anyhow::Result<Config> {
        let mut config =
            Config::load(config_path.as_deref()).context("Failed to load configuration")?;
        if let Some(session) = &session {
            config.session.path = session.clone();
        }
        Ok(config)
    };
    let credentials = Credentials::from_parts(email, password);

    match command {
        Command::Convert(args) => {
            let stdout = io::stdout();
            output::write_conversions(&mut stdout.lock(), &args.raw, args.unit)
        }
        Command::Login { force } => login(&load_config()?, credentials, force).await,
        Command::Logout => logout(&load_config()?),
        Command::Cooks(args) => cooks(&load_config()?, credentials, args).await,
        Command::History(args) => history(&load_config()?, credentials, args).await,
        Command::Devices { json } => devices(&load_config()?, credentials, json).await,
    }
}

async fn login(config: &Config, credentials: Option<Credentials>, force: bool) -> anyhow::Result<()> {
    let mut client = MeaterClient::new(config, credentials)?;
    if force {
        client.relogin().await.map_err(explain)?;
    } else {
        client.login().await.map_err(explain)?;
    }
    info!("Authenticated against {}", client.base_url());
    println!(
        "Logged in as device {} (session: {})",
        client.device_id(),
        config.session.path.display()
    );
    Ok(())
}

fn logout(config: &Config) -> anyhow::Result<()> {
    let store = SessionStore::new(&config.session.path);
    println!("{}", clear_session(&store)?);
    Ok(())
}

/// Drop the stored token, leaving a missing session file untouched
fn clear_session(store: &SessionStore) -> anyhow::Result<String> {
    Ok(match store.clear_token()? {
        Some(session) => format!("Logged out device {}", session.device_id),
        None => format!("No stored session at {}", store.path().display()),
    })
}

async fn fetch_cooks(config: &Config, credentials: Option<Credentials>) -> anyhow::Result<Vec<Cook>> {
    let client = MeaterClient::connect(config, credentials)
        .await
        .map_err(explain)?;
    Ok(client.cooks().await.map_err(explain)?)
}

async fn cooks(
    config: &Config,
    credentials: Option<Credentials>,
    args: CooksArgs,
) -> anyhow::Result<()> {
    let catalog = match &args.catalog {
        Some(path) => MeatCatalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => MeatCatalog::empty(),
    };

    let cooks = output::select_cooks(
        fetch_cooks(config, credentials).await?,
        args.all,
        args.favourites,
    );
    info!("Listing {} cooks", cooks.len());

    let stdout = io::stdout();
    output::write_cooks(&mut stdout.lock(), &cooks, &catalog, args.json)
}

async fn history(
    config: &Config,
    credentials: Option<Credentials>,
    args: HistoryArgs,
) -> anyhow::Result<()> {
    let client = MeaterClient::connect(config, credentials)
        .await
        .map_err(explain)?;
    let cook = client.cook(&args.cook_id).await.map_err(explain)?;
    let samples = cook.history();
    info!("Exporting {} samples of cook {}", samples.len(), cook.id);

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        HistoryFormat::Csv => output::write_history_csv(&mut out, &samples, args.unit)?,
        HistoryFormat::Json => output::write_history_json(&mut out, &cook, &samples, args.unit)?,
    }
    out.flush()?;
    Ok(())
}

async fn devices(
    config: &Config,
    credentials: Option<Credentials>,
    json: bool,
) -> anyhow::Result<()> {
    let Some(credentials) = credentials else {
        bail!("The public API needs --email and --password (or MEATER_EMAIL and MEATER_PASSWORD)");
    };

    let mut client = PublicClient::new(config)?;
    client.login(&credentials).await?;
    let devices = client.devices().await?;

    let stdout = io::stdout();
    output::write_devices(&mut stdout.lock(), &devices, json)
}

/// Attach a next step to errors the user can fix
fn explain(err: ClientError) -> anyhow::Error {
    match err {
        ClientError::MissingCredentials => anyhow::Error::new(err)
            .context("Set --email and --password (or MEATER_EMAIL and MEATER_PASSWORD)"),
        ClientError::Unauthorized { .. } => {
            anyhow::Error::new(err).context("The stored token was rejected; run `meater login --force`")
        }
        other => other.into(),
    }
}
