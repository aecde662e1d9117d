use hostprobe_system as sys;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let display = sys::get_monitor_info();

    println!("=== Monitor Info ===");
    println!("primary    : {}x{}", display.xscreen, display.yscreen);
    println!(
        "work area  : {}x{}",
        display.cx_fullscreen, display.cy_fullscreen
    );

    let (x, y) = display.virtual_origin();
    let (w, h) = display.virtual_extent();
    println!("virtual    : {w}x{h} at {x},{y}");

    if !display.has_display() {
        println!("\nNo display metrics on this platform.");
    }
}
