//! Text output of graphs and search results, and the CSV timing summary.

use crate::brute_search::SearchReport;
use crate::graph::Graph;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

pub const SUMMARY_HEADER: [&str; 3] = ["Input size", "Solution", "Time Taken"];

/// Writes the adjacency list of `graph`, one `vertex -> neighbor neighbor ...` line per vertex.
pub fn write_adjacency<W: Write>(graph: &Graph, mut out: W) -> Result<(), io::Error> {
    writeln!(out, "Adjacency list for the Graph:")?;
    for (vertex, neighbors) in graph.adjacency() {
        write!(out, "{} -> ", vertex)?;
        for neighbor in neighbors {
            write!(out, "{} ", neighbor)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the smallest cover of `report` and its size, or that none was found.
pub fn write_result<W: Write>(report: &SearchReport, mut out: W) -> Result<(), io::Error> {
    match &report.cover {
        Some(cover) => {
            writeln!(out, "\nSmallest Vertex Cover:")?;
            write!(out, "{{ ")?;
            for vertex in cover.vertices() {
                write!(out, "{} ", vertex)?;
            }
            writeln!(out, "}}")?;
            writeln!(out, "Size: {}", cover.len())?;
        }
        None => writeln!(out, "\nNo valid vertex cover found.")?,
    }
    Ok(())
}

/// Appends one record for `report` to the CSV file at `path`, writing `SUMMARY_HEADER` first if
/// the file is missing or empty.
///
/// The input size is the `(n, m)` header of `graph` if it has one, otherwise its actual counts.
pub fn append_summary<P: AsRef<Path>>(
    path: P,
    graph: &Graph,
    report: &SearchReport,
) -> Result<(), io::Error> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let empty = file.metadata()?.len() == 0;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    if empty {
        writer.write_record(SUMMARY_HEADER)?;
    }
    let (n, m) = graph
        .declared_counts()
        .unwrap_or((graph.num_vertices(), graph.num_edges()));
    let solution = report
        .cover
        .as_ref()
        .map(|cover| {
            cover
                .vertices()
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();
    writer.write_record([
        format!("{},{}", n, m),
        solution,
        report.elapsed.as_secs_f64().to_string(),
    ])?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover::Cover;
    use std::fs;
    use std::io::Cursor;
    use std::time::Duration;

    fn report_with(cover: Option<Cover>) -> SearchReport {
        SearchReport {
            cover,
            examined: 0,
            elapsed: Duration::from_millis(250),
        }
    }

    #[test]
    fn adjacency_test() {
        let graph = Graph::read_edge_list(Cursor::new("3 3\n2 1\n1 3\n3 2\n")).unwrap();
        let mut out = Vec::new();
        write_adjacency(&graph, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Adjacency list for the Graph:\n1 -> 2 3 \n2 -> 1 3 \n3 -> 1 2 \n"
        );
    }

    #[test]
    fn result_test() {
        let mut out = Vec::new();
        write_result(&report_with(Some(Cover::new(vec![1, 3]))), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nSmallest Vertex Cover:\n{ 1 3 }\nSize: 2\n"
        );
    }

    #[test]
    fn empty_cover_test() {
        let mut out = Vec::new();
        write_result(&report_with(Some(Cover::default())), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nSmallest Vertex Cover:\n{ }\nSize: 0\n"
        );
    }

    #[test]
    fn no_cover_test() {
        let mut out = Vec::new();
        write_result(&report_with(None), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nNo valid vertex cover found.\n"
        );
    }

    #[test]
    fn summary_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");
        let graph = Graph::read_edge_list(Cursor::new("10 1\n1 2\n")).unwrap();
        append_summary(&path, &graph, &report_with(Some(Cover::new(vec![1])))).unwrap();
        append_summary(&path, &graph, &report_with(Some(Cover::new(vec![2])))).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Input size,Solution,Time Taken",
                "\"10,1\",1,0.25",
                "\"10,1\",2,0.25"
            ]
        );
    }
}
