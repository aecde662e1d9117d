use hostprobe_system::{self as sys, MemField};
use tracing_subscriber::EnvFilter;

fn main() -> sys::SystemResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mem = sys::try_get_mem_info()?;

    println!("=== Memory Info ===");
    for field in MemField::ALL {
        match mem.get(field) {
            Some(kb) => println!("{:<11}: {}", field, sys::utils::format_kb(kb)),
            None => println!("{field:<11}: n/a"),
        }
    }
    println!("used       : {}", sys::utils::format_kb(mem.used()));

    Ok(())
}
