use clap::Parser;

use pwgen_lib::generator::PasswordGenerator;

mod driver;
mod prompt;

/// Generates random passwords for a fixed list of lengths and writes
/// them to generated_passwords.txt. All options are gathered
/// interactively; there are no configuration flags.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {}

fn main() {
    let _args = Args::parse();
    env_logger::init();

    let mut generator = PasswordGenerator::new();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    driver::run(&mut input, &mut generator, driver::OUTPUT_FILE);
}
