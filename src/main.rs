use fittrack::processing::DEMO_PACKAGES;
use fittrack::process_packages;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fittrack=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    for ((code, _), result) in DEMO_PACKAGES.into_iter().zip(process_packages(DEMO_PACKAGES)) {
        match result {
            Ok(line) => println!("{line}"),
            Err(err) => tracing::warn!(code, "skipping package: {err}"),
        }
    }
}
