use super::insights::Insights;

const CLOSING: [&str; 2] = [
    "The convergence of AI, digital twins, and accelerated computing at GTC 2025 \
     signals a fundamental shift in how industries leverage technology. These technological \
     advancements are not just incremental improvements but transformative forces \
     reshaping entire industries from manufacturing to healthcare, retail to finance.",
    "As these technologies mature, we can expect to see increasingly sophisticated \
     applications that combine multiple AI modalities with simulation capabilities, \
     creating unprecedented opportunities for innovation and efficiency gains. The \
     organizations that successfully integrate these technologies into their operations \
     will likely establish significant competitive advantages in their respective markets.",
];

fn bullets(md: &mut String, heading: &str, lines: &[String]) {
    md.push_str(&format!("## {}\n\n", heading));
    for line in lines {
        md.push_str(&format!("- {}\n", line));
    }
    md.push('\n');
}

pub fn render_narrative(insights: &Insights) -> String {
    let mut md = String::from("# Key Insights from NVIDIA GTC 2025\n\n");

    md.push_str("## The Leading Technologies of GTC 2025\n\n");
    for (category, count) in &insights.top_categories {
        md.push_str(&format!("- **{}**: {} sessions\n", category, count));
    }
    md.push('\n');

    bullets(&mut md, "Emerging Trends", &insights.emerging_trends);
    bullets(&mut md, "Industry Focus", &insights.industry_focus);

    md.push_str("## What This Means For The Future\n\n");
    md.push_str(&CLOSING.join("\n\n"));
    md
}
