use shape_info::{write_report, Circle, Rectangle};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

fn setup_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("logging already initialized");
    }
}

fn main() {
    setup_logging();

    let rect = Rectangle::new(5.0, 3.0);
    let circle = Circle::new(2.0);

    let stdout = std::io::stdout();
    if let Err(e) = write_report(&mut stdout.lock(), &[&rect, &circle]) {
        error!("{e}");
    }
}
