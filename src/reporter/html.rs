use crate::aggregator::Summary;
use crate::model::Checklist;
use crate::reporter::{Report, Reporter};

pub struct HtmlReporter;

impl HtmlReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for HtmlReporter {
    fn report(&self, report: &Report) -> String {
        let summary = report.summary;

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        :root {{
            --high: #dc2626;
            --medium: #ea580c;
            --low: #ca8a04;
            --open: #dc2626;
            --naf: #16a34a;
            --nr: #2563eb;
            --na: #6b7280;
        }}

        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}

        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #1f2937;
            background: #f3f4f6;
            padding: 2rem;
        }}

        .container {{
            max-width: 1200px;
            margin: 0 auto;
        }}

        .header {{
            background: white;
            border-radius: 12px;
            padding: 2rem;
            margin-bottom: 2rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }}

        .header h1 {{
            font-size: 1.75rem;
            margin-bottom: 0.5rem;
        }}

        .header-meta {{
            color: #6b7280;
            font-size: 0.9rem;
        }}

        .tabs {{
            display: flex;
            gap: 0.5rem;
            margin-bottom: 1.5rem;
        }}

        .tab-button {{
            border: none;
            background: white;
            padding: 0.6rem 1.2rem;
            border-radius: 9999px;
            font-size: 0.9rem;
            font-weight: 600;
            color: #4b5563;
            cursor: pointer;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }}

        .tab-button.active {{
            background: #1f2937;
            color: white;
        }}

        .tab-panel {{
            display: none;
        }}

        .tab-panel.active {{
            display: block;
        }}

        .summary {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
            gap: 1rem;
            margin-bottom: 2rem;
        }}

        .summary-card {{
            background: white;
            border-radius: 12px;
            padding: 1.5rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }}

        .summary-card h3 {{
            font-size: 0.875rem;
            color: #6b7280;
            text-transform: uppercase;
            margin-bottom: 0.5rem;
        }}

        .summary-value {{
            font-size: 2rem;
            font-weight: 700;
        }}

        .summary-percent {{
            color: #6b7280;
            font-size: 0.875rem;
        }}

        .summary-value.open {{ color: var(--open); }}
        .summary-value.naf {{ color: var(--naf); }}
        .summary-value.nr {{ color: var(--nr); }}
        .summary-value.na {{ color: var(--na); }}
        .summary-value.cat1 {{ color: var(--high); }}
        .summary-value.cat2 {{ color: var(--medium); }}
        .summary-value.cat3 {{ color: var(--low); }}

        .panel-card {{
            background: white;
            border-radius: 12px;
            padding: 1.5rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 2rem;
        }}

        .panel-card h2 {{
            margin-bottom: 1rem;
        }}

        table {{
            width: 100%;
            border-collapse: collapse;
            font-size: 0.9rem;
        }}

        th, td {{
            text-align: left;
            padding: 0.5rem 0.75rem;
            border-bottom: 1px solid #e5e7eb;
        }}

        th {{
            color: #6b7280;
            text-transform: uppercase;
            font-size: 0.75rem;
        }}

        td.num, th.num {{
            text-align: right;
        }}

        .stig-group {{
            margin: 1.25rem 0 0.5rem;
            font-size: 1.05rem;
        }}

        details.finding {{
            border: 1px solid #e5e7eb;
            border-radius: 8px;
            padding: 0.6rem 0.9rem;
            margin-bottom: 0.5rem;
        }}

        details.finding > summary {{
            cursor: pointer;
            font-weight: 600;
        }}

        details.severity-high {{ border-left: 4px solid var(--high); }}
        details.severity-medium {{ border-left: 4px solid var(--medium); }}
        details.severity-low {{ border-left: 4px solid var(--low); }}
        details.severity-unknown {{ border-left: 4px solid var(--na); }}

        .severity-badge {{
            padding: 0.15rem 0.5rem;
            border-radius: 4px;
            font-size: 0.7rem;
            font-weight: 600;
            text-transform: uppercase;
            margin-left: 0.5rem;
        }}

        .severity-badge.high {{ background: #fee2e2; color: var(--high); }}
        .severity-badge.medium {{ background: #ffedd5; color: var(--medium); }}
        .severity-badge.low {{ background: #fef3c7; color: var(--low); }}
        .severity-badge.unknown {{ background: #f3f4f6; color: var(--na); }}

        .host-count {{
            color: #6b7280;
            font-weight: 400;
            font-size: 0.85rem;
            margin-left: 0.5rem;
        }}

        .no-findings {{
            text-align: center;
            padding: 3rem;
            color: #6b7280;
        }}

        .footer {{
            text-align: center;
            margin-top: 2rem;
            color: #9ca3af;
            font-size: 0.875rem;
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{title}</h1>
            <div class="header-meta">
                <div>Generated: {generated_at}</div>
                <div>Checklists: {checklist_count} &middot; Findings: {finding_count}</div>
            </div>
        </div>

        <div class="tabs">
            <button class="tab-button active" id="btn-overview" onclick="showTab('overview')">Overview</button>
            <button class="tab-button" id="btn-stigs" onclick="showTab('stigs')">STIG Summary</button>
            <button class="tab-button" id="btn-findings" onclick="showTab('findings')">Open Findings</button>
            <button class="tab-button" id="btn-hosts" onclick="showTab('hosts')">Hosts</button>
        </div>

        <div class="tab-panel active" id="overview">
            {overview}
        </div>

        <div class="tab-panel" id="stigs">
            <div class="panel-card">
                <h2>Open Findings by STIG</h2>
                {stig_table}
            </div>
        </div>

        <div class="tab-panel" id="findings">
            <div class="panel-card">
                <h2>Unique Open Findings</h2>
                {findings}
            </div>
        </div>

        <div class="tab-panel" id="hosts">
            <div class="panel-card">
                <h2>Checklist Inventory</h2>
                {hosts}
            </div>
        </div>

        <div class="footer">
            Generated by stig-report v{version}
        </div>
    </div>
    <script>
        function showTab(id) {{
            document.querySelectorAll('.tab-panel').forEach(function (p) {{
                p.classList.remove('active');
            }});
            document.querySelectorAll('.tab-button').forEach(function (b) {{
                b.classList.remove('active');
            }});
            document.getElementById(id).classList.add('active');
            document.getElementById('btn-' + id).classList.add('active');
        }}
    </script>
</body>
</html>"#,
            title = html_escape(report.title),
            generated_at = html_escape(&report.generated_at),
            checklist_count = summary.checklists,
            finding_count = summary.total_findings(),
            overview = overview_section(summary),
            stig_table = stig_table(summary),
            findings = findings_section(summary),
            hosts = hosts_table(report.checklists),
            version = env!("CARGO_PKG_VERSION"),
        )
    }
}

fn status_card(label: &str, class: &str, count: usize, summary: &Summary) -> String {
    format!(
        r#"<div class="summary-card">
                <h3>{label}</h3>
                <div class="summary-value {class}">{count}</div>
                <div class="summary-percent">{percent:.1}%</div>
            </div>"#,
        label = label,
        class = class,
        count = count,
        percent = summary.percent_of_total(count),
    )
}

fn overview_section(summary: &Summary) -> String {
    let mut cards = vec![
        status_card("Open", "open", summary.status.open, summary),
        status_card(
            "Not a Finding",
            "naf",
            summary.status.not_a_finding,
            summary,
        ),
        status_card("Not Reviewed", "nr", summary.status.not_reviewed, summary),
        status_card(
            "Not Applicable",
            "na",
            summary.status.not_applicable,
            summary,
        ),
    ];
    if summary.status.other > 0 {
        cards.push(status_card("Other", "na", summary.status.other, summary));
    }
    let status_cards = cards.join("\n            ");

    format!(
        r#"<div class="summary">
            {status_cards}
        </div>
        <div class="summary">
            <div class="summary-card">
                <h3>CAT I (High)</h3>
                <div class="summary-value cat1">{cat1}</div>
            </div>
            <div class="summary-card">
                <h3>CAT II (Medium)</h3>
                <div class="summary-value cat2">{cat2}</div>
            </div>
            <div class="summary-card">
                <h3>CAT III (Low)</h3>
                <div class="summary-value cat3">{cat3}</div>
            </div>
        </div>"#,
        status_cards = status_cards,
        cat1 = summary.open_by_severity.high,
        cat2 = summary.open_by_severity.medium,
        cat3 = summary.open_by_severity.low,
    )
}

fn stig_table(summary: &Summary) -> String {
    if summary.stig_rollups.is_empty() {
        return r#"<div class="no-findings">No STIG data in this batch.</div>"#.to_string();
    }

    let rows: String = summary
        .stig_rollups
        .iter()
        .map(|r| {
            format!(
                r#"<tr>
                    <td>{title}</td>
                    <td class="num">{high}</td>
                    <td class="num">{medium}</td>
                    <td class="num">{low}</td>
                    <td class="num">{open}</td>
                    <td class="num">{total}</td>
                </tr>"#,
                title = html_escape(&r.stig_title),
                high = r.open.high,
                medium = r.open.medium,
                low = r.open.low,
                open = r.open_total,
                total = r.findings,
            )
        })
        .collect();

    format!(
        r#"<table>
            <thead>
                <tr>
                    <th>STIG</th>
                    <th class="num">CAT I</th>
                    <th class="num">CAT II</th>
                    <th class="num">CAT III</th>
                    <th class="num">Open</th>
                    <th class="num">Findings</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>"#,
        rows = rows
    )
}

fn findings_section(summary: &Summary) -> String {
    if summary.unique_findings.is_empty() {
        return r#"<div class="no-findings">No open findings in this batch.</div>"#.to_string();
    }

    // unique_findings is sorted by STIG title, so grouping is a single pass.
    let mut out = String::new();
    let mut current_stig: Option<&str> = None;
    for finding in &summary.unique_findings {
        if current_stig != Some(finding.stig_title.as_str()) {
            out.push_str(&format!(
                "<h3 class=\"stig-group\">{}</h3>\n",
                html_escape(&finding.stig_title)
            ));
            current_stig = Some(finding.stig_title.as_str());
        }

        let severity_class = finding.severity.as_str();
        let hosts: String = finding
            .hosts
            .iter()
            .map(|h| {
                format!(
                    r#"<tr><td>{name}</td><td>{ip}</td><td>{file}</td></tr>"#,
                    name = html_escape(&h.host_name),
                    ip = html_escape(&h.host_ip),
                    file = html_escape(&h.file_name),
                )
            })
            .collect();

        out.push_str(&format!(
            r#"<details class="finding severity-{severity_class}">
                <summary>{vuln_id} &mdash; {rule_title}<span class="severity-badge {severity_class}">{severity}</span><span class="host-count">{host_count} host(s)</span></summary>
                <table>
                    <thead><tr><th>Host</th><th>IP</th><th>Source File</th></tr></thead>
                    <tbody>{hosts}</tbody>
                </table>
            </details>
"#,
            severity_class = severity_class,
            vuln_id = html_escape(&finding.vuln_id),
            rule_title = html_escape(&finding.rule_title),
            severity = finding.severity,
            host_count = finding.hosts.len(),
            hosts = hosts,
        ));
    }
    out
}

fn hosts_table(checklists: &[Checklist]) -> String {
    if checklists.is_empty() {
        return r#"<div class="no-findings">No checklists loaded.</div>"#.to_string();
    }

    let rows: String = checklists
        .iter()
        .map(|c| {
            format!(
                r#"<tr>
                    <td>{host}</td>
                    <td>{ip}</td>
                    <td>{fqdn}</td>
                    <td>{role}</td>
                    <td>{stig}</td>
                    <td>{release}</td>
                    <td class="num">{findings}</td>
                    <td class="num">{open}</td>
                    <td>{file}</td>
                </tr>"#,
                host = html_escape(&c.host_name),
                ip = html_escape(&c.host_ip),
                fqdn = html_escape(&c.fqdn),
                role = html_escape(&c.role),
                stig = html_escape(&c.stig_title),
                release = html_escape(&c.release_info),
                findings = c.findings.len(),
                open = c.open_count(),
                file = html_escape(&c.file_name),
            )
        })
        .collect();

    format!(
        r#"<table>
            <thead>
                <tr>
                    <th>Host</th>
                    <th>IP</th>
                    <th>FQDN</th>
                    <th>Role</th>
                    <th>STIG</th>
                    <th>Release</th>
                    <th class="num">Findings</th>
                    <th class="num">Open</th>
                    <th>File</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>"#,
        rows = rows
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
