//! Key listing command

use anyhow::Result;
use cadence_runtime::{Key, MouseButton};

pub fn run() -> Result<()> {
    println!("Keys ({}):", Key::COUNT);
    for key in Key::ALL {
        println!("  {:>3}  {:?}", key.index(), key);
    }

    println!("\nMouse buttons ({}):", MouseButton::COUNT);
    for button in MouseButton::ALL {
        println!(
            "  {:>3}  {:?} (platform ordinal {})",
            button.index(),
            button,
            button.to_raw()
        );
    }
    Ok(())
}
