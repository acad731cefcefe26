/// Where the check writes its plugin line.
pub trait Printer {
    fn print(&self, output: &str);

    fn println(&self, output: &str) {
        self.print(&format!("{output}\n"));
    }
}
