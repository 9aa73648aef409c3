use colored::Colorize;
use crudgen::api::{CmdMessage, MessageLevel};
use crudgen::error::CrudgenError;

pub(super) fn print_banner() {
    println!("🚀 UML-to-CRUD Generator (Rust CLI)");
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("✅ {}", message.content.green()),
            MessageLevel::Error => println!("❌ {}", message.content.red()),
        }
    }
}

pub fn print_error(error: &CrudgenError) {
    println!("❌ {}", error.to_string().red());
}
