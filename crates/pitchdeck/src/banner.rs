use colored::Colorize;

pub fn print_banner_with_version() {
    println!("{}", "Pitch Perfect".cyan().bold());
    println!("pitchdeck {}", env!("CARGO_PKG_VERSION"));
}
