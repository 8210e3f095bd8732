use chanmerge_core::merge::config::MergeConfig;
use console::Style;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_merge_summary(config: &MergeConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Chanmerge"));
    println!();
    println!(
        "  {} {}",
        s.label.apply_to("Input:    "),
        s.path.apply_to(config.input_dir.display())
    );
    println!(
        "  {} {}",
        s.label.apply_to("Output:   "),
        s.path.apply_to(config.output_dir().display())
    );
    println!(
        "  {} {}",
        s.label.apply_to("Channels: "),
        s.value.apply_to(config.channels.code_string())
    );
    println!(
        "  {} {}",
        s.label.apply_to("Mode:     "),
        s.value
            .apply_to(if config.parallel { "parallel" } else { "sequential" })
    );
    println!();
}
