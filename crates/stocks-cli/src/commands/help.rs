use std::io::Write;

/// Command summaries, kept sorted by command name.
const SUMMARIES: &[(&str, &str)] = &[
    ("exit", "Exit stocks"),
    ("help", "Displays help"),
    ("ls", "List all known stocks"),
    ("stock", "Displays latest valuations for stock"),
    ("up stock", "Updates stock"),
];

/// Print one command's summary, or every summary when the topic is unknown
/// or absent.
pub fn run(output: &mut impl Write, topic: Option<&str>) -> std::io::Result<()> {
    if let Some(topic) = topic {
        if let Some(&(command, summary)) = SUMMARIES.iter().find(|&&(command, _)| command == topic)
        {
            return print_line(output, command, summary);
        }
    }

    for &(command, summary) in SUMMARIES {
        print_line(output, command, summary)?;
    }
    Ok(())
}

fn print_line(output: &mut impl Write, command: &str, summary: &str) -> std::io::Result<()> {
    writeln!(output, "{command:<10} {summary}")
}
