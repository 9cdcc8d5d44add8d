//! HTML page assembly

use doxa_domain::{Argument, PcsMember, Relation, Role};
use doxa_engine::{log_odds, VerificationReport};

const STYLE: &str = r#"body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    max-width: 42em; margin: 2em auto; padding: 0 1em;
    line-height: 1.6; color: #333;
}
h1 { color: #1a1a1a; font-size: 1.4em; }
h2 { color: #555; font-size: 1.1em; border-bottom: 1px solid #ddd; padding-bottom: 0.3em; }
h3 { color: #0582ca; font-size: 1em; margin-bottom: 0.5em; }
.bottom-line {
    background: #f8f9fa; border-left: 4px solid #0582ca;
    padding: 1em 1.5em; margin-bottom: 2em; font-size: 1.1em;
}
.bottom-line .claim { font-weight: 600; }
.bottom-line .via { font-size: 0.85em; color: #666; margin-top: 0.3em; }
.argument {
    margin-bottom: 2em; padding: 1em;
    border: 1px solid #e0e0e0; border-radius: 6px;
}
.premise { margin-bottom: 0.8em; padding-left: 2em; }
.premise-nr { color: #0582ca; font-weight: 600; }
.source-line { padding-left: 2em; margin-top: 0.2em; font-size: 0.9em; }
.label-conclusion { color: #0582ca; font-weight: 600; font-style: italic; }
.inference-step {
    border-top: 2px solid #0582ca; border-bottom: 2px solid #0582ca;
    padding: 0.5em 1em; margin: 0.8em 0;
    color: #0582ca; font-size: 0.9em; font-style: italic;
}
.conclusion { padding: 0.5em; background: #f8f9fa; border-radius: 4px; }
.math { font-size: 0.9em; color: #555; font-variant-numeric: tabular-nums; }
.relation-indicator { font-size: 0.85em; font-weight: 600; margin-left: 0.5em; }
.credence { font-size: 0.85em; font-variant-numeric: tabular-nums; }
.section-label { color: #888; font-size: 0.9em; text-transform: uppercase; letter-spacing: 0.05em; }
"#;

/// Render the verified map as a self-contained HTML page
pub fn render(report: &VerificationReport) -> String {
    let title = page_title(report);

    let mut html = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n<h1>{}</h1>\n",
        escape_html(&title),
        STYLE,
        escape_html(&title)
    );

    html.push_str(&render_bottom_lines(report));

    for (section_title, args) in group_by_section(report) {
        if let Some(section_title) = section_title {
            html.push_str(&format!("<h2>{}</h2>\n", escape_html(&section_title)));
        }
        for arg in args {
            html.push_str(&render_argument(arg, report));
        }
    }

    html.push_str("</body>\n</html>");
    html
}

fn page_title(report: &VerificationReport) -> String {
    let top_level = report
        .statements
        .as_map()
        .values()
        .find(|s| s.top_level);
    match top_level {
        Some(s) if !s.text.is_empty() => s.text.clone(),
        Some(s) => s.title.clone(),
        None => "Argument Map".to_string(),
    }
}

fn render_bottom_lines(report: &VerificationReport) -> String {
    if report.targets.is_empty() {
        return String::new();
    }
    let mut html =
        String::from("<div class=\"bottom-line\">\n<span class=\"section-label\">Bottom line</span>\n");
    for (title, target) in &report.targets {
        html.push_str(&format!(
            "<div class=\"claim\">{}: {} <span style=\"font-size:0.8em;color:#888\">({:+.1} log-odds)</span></div>\n",
            escape_html(title),
            credence_badge(target.implied, "implied credence", ""),
            target.log_odds
        ));
        for (name, credence) in &target.via_entail {
            html.push_str(&format!(
                "<div class=\"via\">&uarr; {} ({:.0}%, {:+.1})</div>\n",
                escape_html(name),
                credence * 100.0,
                log_odds(*credence)
            ));
        }
        for (name, credence) in &target.via_contrary {
            html.push_str(&format!(
                "<div class=\"via\">&darr; {} ({:.0}%, {:+.1})</div>\n",
                escape_html(name),
                credence * 100.0,
                log_odds(*credence)
            ));
        }
    }
    html.push_str("</div>\n");
    html
}

/// Group arguments under their section titles, keeping argument order and
/// the order in which sections first appear
fn group_by_section(report: &VerificationReport) -> Vec<(Option<String>, Vec<&Argument>)> {
    let mut groups: Vec<(Option<String>, Vec<&Argument>)> = Vec::new();
    for arg in &report.arguments {
        let key = arg.section.as_ref().map(|id| {
            report
                .sections
                .iter()
                .find(|s| &s.id == id)
                .map(|s| s.title.clone())
                .unwrap_or_default()
        });
        let key = key.filter(|t| !t.is_empty());
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, args)) => args.push(arg),
            None => groups.push((key, vec![arg])),
        }
    }
    groups
}

fn render_argument(arg: &Argument, report: &VerificationReport) -> String {
    if arg.pcs.is_empty() {
        return String::new();
    }

    let premises: Vec<&PcsMember> = arg.pcs.iter().filter(|m| m.role == Role::Premise).collect();
    let conclusions: Vec<&PcsMember> = arg
        .pcs
        .iter()
        .filter(|m| m.role == Role::MainConclusion)
        .collect();

    // The argument's relation to the rest of the map, read off its
    // conclusion's first outgoing relation
    let conclusion_relation = conclusions
        .iter()
        .find_map(|c| report.relations.iter().find(|r| r.from == c.title));
    let border_color = match conclusion_relation.map(|r| r.kind.as_str()) {
        Some("entails") => "#2d9a2d",
        Some("contrary") => "#d9534f",
        _ => "#e0e0e0",
    };

    let mut html = format!(
        "<div class=\"argument\" style=\"border-left: 4px solid {};\">\n<h3>{}</h3>\n",
        border_color,
        escape_html(&arg.name)
    );

    for (i, premise) in premises.iter().enumerate() {
        html.push_str(&format!(
            "<div class=\"premise\">\n<span class=\"premise-nr\">({})</span> <strong>{}</strong>",
            i + 1,
            escape_html(&premise.title)
        ));
        if !premise.text.is_empty() {
            html.push_str(&format!(" {}", escape_html(&premise.text)));
        }
        if let Some(credence) = premise.credence {
            html.push_str(&format!(
                "\n<div class=\"source-line\">{}</div>",
                credence_badge(credence, "credence", premise.reason.as_deref().unwrap_or(""))
            ));
        }
        html.push_str("\n</div>\n");
    }

    for conclusion in &conclusions {
        if let Some(inference) = conclusion.inference {
            html.push_str(&format!(
                "<div class=\"inference-step\">&there4; {}</div>\n",
                credence_badge(inference, "inference", conclusion.reason.as_deref().unwrap_or(""))
            ));
        }
    }

    for conclusion in &conclusions {
        html.push_str(&render_conclusion(conclusion, &premises, conclusion_relation, report));
    }

    html.push_str("</div>\n");
    html
}

fn render_conclusion(
    conclusion: &PcsMember,
    premises: &[&PcsMember],
    relation: Option<&Relation>,
    report: &VerificationReport,
) -> String {
    let mut html = format!(
        "<div class=\"conclusion\">\n<span class=\"label-conclusion\">Then</span> <strong>{}</strong>: {}",
        escape_html(&conclusion.title),
        escape_html(&conclusion.text)
    );

    let computed = report
        .statements
        .get(&conclusion.title)
        .and_then(|s| s.credence);
    if let Some(computed) = computed {
        let premise_values: Vec<f64> = premises.iter().filter_map(|p| p.credence).collect();
        if let (false, Some(inference)) = (premise_values.is_empty(), conclusion.inference) {
            let parts = premise_values
                .iter()
                .map(|c| format!("{:.0}%", c * 100.0))
                .collect::<Vec<_>>()
                .join(" &times; ");
            html.push_str(&format!(
                "<br><span class=\"math\">{} &times; {:.0}% = {}</span>",
                parts,
                inference * 100.0,
                credence_badge(computed, "computed credence", "")
            ));
        } else {
            html.push_str(&format!(
                "<br>computed: {}",
                credence_badge(computed, "computed credence", "")
            ));
        }
    }

    if let Some(relation) = relation {
        let (symbol, label) = match relation.kind.as_str() {
            "entails" => ("&uarr;", "supports"),
            "contrary" => ("&darr;", "challenges"),
            "contradictory" => ("&harr;", "contradicts"),
            _ => ("?", "relates to"),
        };
        html.push_str(&format!(
            "<span class=\"relation-indicator\"> {} {} {}</span>",
            symbol,
            label,
            escape_html(&relation.to)
        ));
    }

    html.push_str("\n</div>\n");
    html
}

/// A credence rendered as a colored percentage badge
///
/// Hue ramps red (0.0) to green (1.0); the exact value and the authoring
/// reason go into the tooltip.
fn credence_badge(credence: f64, label: &str, reason: &str) -> String {
    let hue = (credence * 120.0).round();
    let mut tooltip = if label.is_empty() {
        format!("{:.2}", credence)
    } else {
        format!("{}: {:.2}", label, credence)
    };
    if !reason.is_empty() {
        tooltip.push_str(" -- ");
        tooltip.push_str(reason);
    }
    format!(
        "<span class=\"credence\" style=\"color:hsl({hue}, 70%, 45%); \
         background:hsl({hue}, 60%, 92%); padding:2px 6px; border-radius:4px; \
         font-weight:600\" title=\"{}\">{:.0}%</span>",
        escape_html(&tooltip),
        credence * 100.0
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use doxa_domain::{ArgumentMap, RelationKind, Section, Statement, StatementMap};
    use doxa_engine::{EngineConfig, Verifier};

    fn sample_report() -> VerificationReport {
        let statements: StatementMap = {
            let mut thesis = Statement::new("Thesis");
            thesis.top_level = true;
            thesis.text = "The thesis holds".to_string();
            [
                ("Thesis".to_string(), thesis),
                ("Conclusion".to_string(), Statement::new("Conclusion")),
                ("P1".to_string(), Statement::new("P1")),
            ]
            .into_iter()
            .collect()
        };

        let mut premise = PcsMember::new(Role::Premise, "P1");
        premise.credence = Some(0.9);
        premise.reason = Some("well sourced".to_string());
        let mut conclusion = PcsMember::new(Role::MainConclusion, "Conclusion");
        conclusion.inference = Some(0.8);
        let mut argument = Argument::new("core argument", vec![premise, conclusion]);
        argument.section = Some("s1".to_string());

        let map = ArgumentMap {
            statements,
            relations: vec![Relation::new("Conclusion", "Thesis", RelationKind::Entails)],
            arguments: vec![argument],
            sections: vec![Section {
                id: "s1".to_string(),
                title: "Evidence".to_string(),
            }],
        };
        Verifier::new(EngineConfig::permissive()).run(map)
    }

    #[test]
    fn test_page_title_comes_from_top_level_statement() {
        let html = render(&sample_report());
        assert!(html.contains("<title>The thesis holds</title>"));
    }

    #[test]
    fn test_bottom_line_panel_shows_implied_credence() {
        let html = render(&sample_report());
        assert!(html.contains("Bottom line"));
        assert!(html.contains("&uarr; Conclusion"));
    }

    #[test]
    fn test_arguments_grouped_under_section_title() {
        let html = render(&sample_report());
        assert!(html.contains("<h2>Evidence</h2>"));
        assert!(html.contains("<h3>core argument</h3>"));
    }

    #[test]
    fn test_computed_math_line() {
        let html = render(&sample_report());
        // 0.9 * 0.8 = 0.72 shown as percentages
        assert!(html.contains("90% &times; 80% = "));
        assert!(html.contains("72%"));
    }

    #[test]
    fn test_supporting_argument_gets_green_border() {
        let html = render(&sample_report());
        assert!(html.contains("border-left: 4px solid #2d9a2d"));
        assert!(html.contains("&uarr; supports Thesis"));
    }

    #[test]
    fn test_html_is_escaped() {
        let mut report = sample_report();
        report
            .arguments
            .push(Argument::new("<script>", vec![PcsMember::new(Role::Premise, "x")]));
        let html = render(&report);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
