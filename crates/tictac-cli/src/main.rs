mod command;
mod util;

fn main() -> anyhow::Result<()> {
    util::init_logger();
    command::run()
}
