use super::printer::Printer;

/// Prints to the standard output.
pub struct Console {}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl Printer for Console {
    fn print(&self, output: &str) {
        print!("{output}");
    }

    fn println(&self, output: &str) {
        println!("{output}");
    }
}
