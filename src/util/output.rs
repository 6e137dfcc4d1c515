use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Yellow,
}

/// Where workflow reports are written.
pub trait OutputSink {
    fn write_line(&mut self, text: &str, color: Option<Color>);

    fn blank_line(&mut self) {
        self.write_line("", None);
    }
}

/// Writes to stdout, colouring hinted lines.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write_line(&mut self, text: &str, color: Option<Color>) {
        match color {
            None => println!("{}", text),
            Some(Color::Green) => println!("{}", text.green()),
            Some(Color::Yellow) => println!("{}", text.yellow()),
        }
    }
}

/// Keeps every written line in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Vec<(String, Option<Color>)>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|(text, _)| text.as_str())
    }

    pub fn colored_lines(&self) -> &[(String, Option<Color>)] {
        &self.lines
    }

    pub fn contents(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }
}

impl OutputSink for BufferSink {
    fn write_line(&mut self, text: &str, color: Option<Color>) {
        self.lines.push((text.to_string(), color));
    }
}
