mod args;
mod config;
mod interactive;
mod io;
mod parse;
mod run;
#[cfg(test)]
mod test_utils;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("TELOP_LOG", "warn"))
        .format_timestamp(None)
        .init();
    if let Err(err) = run::run() {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
