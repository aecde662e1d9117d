use hostprobe_system::SystemInfo;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let info = SystemInfo::new();
    println!("{}", info.summary());
}
