//! Standalone HTML report.
//!
//! One self-contained file: inline CSS, no scripts. The charts are
//! proportional CSS bars so the report renders anywhere, including mail
//! clients that strip JavaScript.

use std::io;
use std::path::Path;

use chrono::Local;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::info;

use callrep_core::{
    CONSOLIDATED_NAME, ImportantObservations, ProcessedWorkbook, hourly_call_volume,
    important_observations, outcome_distribution, summarize,
};
use callrep_model::SheetSummary;

use crate::common::{ensure_parent_dir, write_text_element};
use crate::error::{ReportError, Result};

const REPORT_CSS: &str = r#"
body { font-family: Arial, sans-serif; margin: 20px; background-color: #f5f5f5; }
.header { background-color: #2c3e50; color: white; padding: 20px; border-radius: 10px; margin-bottom: 20px; }
.header h1 { color: white; }
.metrics { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 15px; margin-bottom: 30px; }
.metric-card { background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); text-align: center; }
.metric-value { font-size: 2em; font-weight: bold; color: #2c3e50; }
.metric-label { color: #7f8c8d; margin-top: 5px; }
.chart-container { background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); margin-bottom: 20px; }
.bar-row { display: grid; grid-template-columns: 180px 1fr 80px; align-items: center; gap: 10px; margin: 6px 0; }
.bar-track { background: #ecf0f1; border-radius: 4px; height: 18px; }
.bar { background: #3498db; border-radius: 4px; height: 18px; }
.bar-value { text-align: right; color: #2c3e50; font-weight: bold; }
.observations { background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); margin-bottom: 20px; }
.observation { border-bottom: 1px solid #ecf0f1; padding: 10px 0; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 8px; border-bottom: 1px solid #ecf0f1; }
th { color: #2c3e50; }
.footer { text-align: center; margin-top: 30px; color: #7f8c8d; font-size: 0.9em; }
h1, h2, h3 { color: #2c3e50; }
"#;

/// Renders the report and writes it to `path`, stamped with the local time.
pub fn write_html_report(path: &Path, processed: &ProcessedWorkbook) -> Result<()> {
    let generated_at = Local::now().format("%d/%m/%Y %H:%M").to_string();
    let html = render_html(processed, &generated_at).map_err(|e| ReportError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    ensure_parent_dir(path)?;
    std::fs::write(path, html).map_err(|e| ReportError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), "wrote HTML report");
    Ok(())
}

/// Renders the full report document to bytes.
pub fn render_html(processed: &ProcessedWorkbook, generated_at: &str) -> io::Result<Vec<u8>> {
    let records = processed.consolidate();
    let summary = summarize(CONSOLIDATED_NAME, &records);
    let distribution = outcome_distribution(&records);
    let volume = hourly_call_volume(&records);
    let observations = important_observations(&records);

    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);
    xml.write_event(Event::DocType(BytesText::new("html")))?;

    let mut html = BytesStart::new("html");
    html.push_attribute(("lang", "pt-BR"));
    xml.write_event(Event::Start(html))?;

    xml.write_event(Event::Start(BytesStart::new("head")))?;
    let mut charset = BytesStart::new("meta");
    charset.push_attribute(("charset", "UTF-8"));
    xml.write_event(Event::Empty(charset))?;
    let mut viewport = BytesStart::new("meta");
    viewport.push_attribute(("name", "viewport"));
    viewport.push_attribute(("content", "width=device-width, initial-scale=1.0"));
    xml.write_event(Event::Empty(viewport))?;
    write_text_element(
        &mut xml,
        "title",
        &format!("Relatório de Contatos - {}", processed.name),
    )?;
    write_text_element(&mut xml, "style", REPORT_CSS)?;
    xml.write_event(Event::End(BytesEnd::new("head")))?;

    xml.write_event(Event::Start(BytesStart::new("body")))?;

    open_classed(&mut xml, "div", "header")?;
    write_text_element(
        &mut xml,
        "h1",
        &format!("📊 Relatório de Contatos - {}", processed.name),
    )?;
    write_text_element(&mut xml, "p", &format!("Gerado em: {generated_at}"))?;
    close_element(&mut xml, "div")?;

    metrics_section(&mut xml, &summary)?;

    if !distribution.is_empty() {
        let rows: Vec<BarRow> = distribution
            .iter()
            .map(|(category, count)| BarRow {
                label: category.label().to_string(),
                count: *count,
            })
            .collect();
        bar_section(&mut xml, "Distribuição de Situações", &rows)?;
    }

    if !volume.is_empty() {
        let rows: Vec<BarRow> = volume
            .iter()
            .map(|(hour, count)| BarRow {
                label: format!("{hour:02}:00"),
                count: *count,
            })
            .collect();
        bar_section(&mut xml, "Horários de Ligações", &rows)?;
    }

    observations_section(&mut xml, &observations)?;
    sheets_table_section(&mut xml, processed)?;

    open_classed(&mut xml, "div", "footer")?;
    write_text_element(
        &mut xml,
        "p",
        "Relatório gerado automaticamente - Sistema de Análise de Ligações",
    )?;
    write_text_element(
        &mut xml,
        "p",
        "Para atualizar os dados, execute novamente o processamento com as planilhas atualizadas",
    )?;
    close_element(&mut xml, "div")?;

    xml.write_event(Event::End(BytesEnd::new("body")))?;
    xml.write_event(Event::End(BytesEnd::new("html")))?;
    Ok(xml.into_inner())
}

struct BarRow {
    label: String,
    count: usize,
}

fn open_classed<W: io::Write>(xml: &mut Writer<W>, name: &str, class: &str) -> io::Result<()> {
    let mut element = BytesStart::new(name);
    element.push_attribute(("class", class));
    xml.write_event(Event::Start(element))
}

fn close_element<W: io::Write>(xml: &mut Writer<W>, name: &str) -> io::Result<()> {
    xml.write_event(Event::End(BytesEnd::new(name)))
}

fn metric_card<W: io::Write>(xml: &mut Writer<W>, value: &str, label: &str) -> io::Result<()> {
    open_classed(xml, "div", "metric-card")?;
    open_classed(xml, "div", "metric-value")?;
    xml.write_event(Event::Text(BytesText::new(value)))?;
    close_element(xml, "div")?;
    open_classed(xml, "div", "metric-label")?;
    xml.write_event(Event::Text(BytesText::new(label)))?;
    close_element(xml, "div")?;
    close_element(xml, "div")
}

fn metrics_section<W: io::Write>(xml: &mut Writer<W>, summary: &SheetSummary) -> io::Result<()> {
    let total_phones = summary.with_phone1 + summary.with_phone2;
    open_classed(xml, "div", "metrics")?;
    metric_card(xml, &summary.records.to_string(), "Total de Empresas")?;
    metric_card(xml, &total_phones.to_string(), "Total de Telefones")?;
    metric_card(xml, &summary.with_email.to_string(), "Total de Emails")?;
    metric_card(
        xml,
        &summary.distinct_outcomes.to_string(),
        "Situações Únicas",
    )?;
    close_element(xml, "div")
}

fn bar_section<W: io::Write>(xml: &mut Writer<W>, title: &str, rows: &[BarRow]) -> io::Result<()> {
    let max = rows.iter().map(|row| row.count).max().unwrap_or(1).max(1);
    open_classed(xml, "div", "chart-container")?;
    write_text_element(xml, "h2", title)?;
    for row in rows {
        open_classed(xml, "div", "bar-row")?;
        open_classed(xml, "span", "bar-label")?;
        xml.write_event(Event::Text(BytesText::new(&row.label)))?;
        close_element(xml, "span")?;

        open_classed(xml, "div", "bar-track")?;
        let width = (row.count * 100).div_ceil(max);
        let mut bar = BytesStart::new("div");
        bar.push_attribute(("class", "bar"));
        let style = format!("width: {width}%");
        bar.push_attribute(("style", style.as_str()));
        xml.write_event(Event::Start(bar))?;
        close_element(xml, "div")?;
        close_element(xml, "div")?;

        open_classed(xml, "span", "bar-value")?;
        xml.write_event(Event::Text(BytesText::new(&row.count.to_string())))?;
        close_element(xml, "span")?;
        close_element(xml, "div")?;
    }
    close_element(xml, "div")
}

/// A `<p>` with a leading text run and the value in `<strong>`.
fn metric_line<W: io::Write>(xml: &mut Writer<W>, lead: &str, value: &str) -> io::Result<()> {
    xml.write_event(Event::Start(BytesStart::new("p")))?;
    xml.write_event(Event::Text(BytesText::new(lead)))?;
    write_text_element(xml, "strong", value)?;
    xml.write_event(Event::End(BytesEnd::new("p")))
}

fn observations_section<W: io::Write>(
    xml: &mut Writer<W>,
    observations: &ImportantObservations<'_>,
) -> io::Result<()> {
    open_classed(xml, "div", "observations")?;
    write_text_element(xml, "h2", "📝 Observações Importantes")?;

    if observations.count() == 0 {
        write_text_element(
            xml,
            "p",
            "Não há observações importantes (todas as situações são \"Não atende\")",
        )?;
        return close_element(xml, "div");
    }

    metric_line(
        xml,
        "Total de observações importantes: ",
        &observations.count().to_string(),
    )?;
    metric_line(
        xml,
        "Percentual do total: ",
        &format!("{:.1}%", observations.percent),
    )?;
    metric_line(
        xml,
        "Situações diferentes: ",
        &observations.distinct_outcomes().to_string(),
    )?;

    write_text_element(xml, "h3", "Resumo por Situação:")?;
    xml.write_event(Event::Start(BytesStart::new("ul")))?;
    for (category, count) in &observations.outcome_counts {
        xml.write_event(Event::Start(BytesStart::new("li")))?;
        write_text_element(xml, "strong", &format!("{}:", category.label()))?;
        xml.write_event(Event::Text(BytesText::new(&format!(
            " {count} ocorrências"
        ))))?;
        xml.write_event(Event::End(BytesEnd::new("li")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("ul")))?;

    write_text_element(xml, "h3", "Detalhes das observações")?;
    for record in &observations.records {
        open_classed(xml, "div", "observation")?;
        write_text_element(
            xml,
            "h4",
            record.company_name.as_deref().unwrap_or("Não informado"),
        )?;
        metric_line(
            xml,
            "CNPJ: ",
            record.company_id.as_deref().unwrap_or("Não informado"),
        )?;
        metric_line(xml, "Situação: ", record.outcome.label())?;
        metric_line(
            xml,
            "Observação: ",
            record.note.as_deref().unwrap_or("Sem observação"),
        )?;
        close_element(xml, "div")?;
    }

    close_element(xml, "div")
}

fn sheets_table_section<W: io::Write>(
    xml: &mut Writer<W>,
    processed: &ProcessedWorkbook,
) -> io::Result<()> {
    open_classed(xml, "div", "chart-container")?;
    write_text_element(xml, "h2", "Resumo por Planilha")?;
    xml.write_event(Event::Start(BytesStart::new("table")))?;

    xml.write_event(Event::Start(BytesStart::new("thead")))?;
    xml.write_event(Event::Start(BytesStart::new("tr")))?;
    for column in [
        "Planilha",
        "Registros",
        "Com Telefone 1",
        "Com Telefone 2",
        "Com Email",
        "Situações Únicas",
    ] {
        write_text_element(xml, "th", column)?;
    }
    xml.write_event(Event::End(BytesEnd::new("tr")))?;
    xml.write_event(Event::End(BytesEnd::new("thead")))?;

    xml.write_event(Event::Start(BytesStart::new("tbody")))?;
    for sheet in &processed.sheets {
        let summary = &sheet.summary;
        xml.write_event(Event::Start(BytesStart::new("tr")))?;
        write_text_element(xml, "td", &summary.sheet)?;
        write_text_element(xml, "td", &summary.records.to_string())?;
        write_text_element(xml, "td", &summary.with_phone1.to_string())?;
        write_text_element(xml, "td", &summary.with_phone2.to_string())?;
        write_text_element(xml, "td", &summary.with_email.to_string())?;
        write_text_element(xml, "td", &summary.distinct_outcomes.to_string())?;
        xml.write_event(Event::End(BytesEnd::new("tr")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("tbody")))?;

    xml.write_event(Event::End(BytesEnd::new("table")))?;
    close_element(xml, "div")
}
