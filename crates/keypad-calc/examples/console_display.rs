//! Console Display Demo
//!
//! Plugs a custom display sink into the controller and prints every
//! refresh while a few button sequences are pressed.
//!
//! Run with: cargo run --example console_display

use keypad_calc::prelude::*;

/// Prints each refresh as a two-line panel
struct ConsoleDisplay {
    refreshes: usize,
}

impl DisplaySink for ConsoleDisplay {
    fn refresh(&mut self, snapshot: &DisplaySnapshot) {
        self.refreshes += 1;
        println!("   ┌──────────────────────────┐");
        println!("   │{:>26}│", snapshot.pending);
        println!("   │{:>26}│", snapshot.current);
        println!("   └──────────────────────────┘");
    }
}

fn run(title: &str, buttons: &[&str]) {
    println!("\n{title}: {}", buttons.join(" "));
    println!("─────────────────────────────────");

    let mut calc = Controller::new(ConsoleDisplay { refreshes: 0 });
    let applied = calc.dispatch_all(parse_script(buttons));
    println!(
        "   {applied} of {} presses applied, {} refreshes",
        buttons.len(),
        calc.sink().refreshes
    );
}

fn main() {
    println!("╔══════════════════════════════════════╗");
    println!("║     keypad-calc Console Display      ║");
    println!("╚══════════════════════════════════════╝");

    run("Chained operators", &["3", "+", "4", "×", "2", "="]);
    run("Division by zero", &["1", "0", "÷", "0", "=", "5"]);
    run("Ignored presses", &["1", ".", ".", "5", "=", "DEL"]);
}
