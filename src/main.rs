use exprcheck::cli;

fn main() {
    cli::run();
}
