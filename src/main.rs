//! Example usage of the ergonomic-console library.
//!
//! Set `RUST_LOG=ergonomic_console=trace` to see every native call. An
//! optional first argument is used as the window title.

use tracing_subscriber::EnvFilter;

#[cfg(windows)]
fn main() -> ergonomic_console::error::Result<()> {
    use ergonomic_console::prelude::*;

    init_logging();
    let title = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("Ergonomic Console Demo"));

    let console = Console::system();
    let out = console.std_handle(StdStream::Output)?;
    let input = console.std_handle(StdStream::Input)?;

    console.set_title(&title)?;
    console.enable_mode(out, ConsoleMode::VIRTUAL_TERMINAL_PROCESSING)?;

    println!("Ergonomic Console Demo\n");

    println!("=== Screen Buffer ===");
    let info = console.screen_buffer_info(out)?;
    println!("Buffer size: {}x{}", info.size.x, info.size.y);
    println!(
        "Window size: {}x{}",
        info.window.width(),
        info.window.height()
    );
    println!(
        "Cursor at: ({}, {})",
        info.cursor_position.x, info.cursor_position.y
    );
    println!();

    println!("=== Modes ===");
    println!("Output mode: {:?}", console.mode(out)?);
    println!("Input mode: {:?}", console.mode(input)?);
    println!();

    println!("=== Code Pages ===");
    println!("Input: {}", console.input_code_page()?);
    println!("Output: {}", console.output_code_page()?);
    println!();

    console.set_cursor_visible(out, false)?;
    console.pause(input, "Cursor hidden. Press any key to show it again...")?;
    console.set_cursor_visible(out, true)?;

    console.pause(input, "Press any key to clear the screen...")?;
    console.clear_screen_buffer(out)?;
    let banner = CharInfo::new(
        u16::from(b'='),
        CharAttributes::from_colors(Color::Yellow, Color::DarkBlue),
    );
    let width = u32::try_from(info.size.x).unwrap_or(0);
    console.fill(out, banner, width, Coord::ORIGIN)?;
    console.write_str(out, " demo complete ", Coord::new(2, 0))?;
    console.set_cursor_position(out, Coord::new(0, 2))?;

    Ok(())
}

#[cfg(not(windows))]
fn main() {
    init_logging();
    tracing::error!("ergonomic-console needs a Windows console");
    eprintln!("This demo requires a Windows console.");
    std::process::exit(1);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
