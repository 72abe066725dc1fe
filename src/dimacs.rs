use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{space0, space1, u32 as read_u32};
use nom::combinator::all_consuming;
use nom::sequence::{preceded, separated_pair, terminated};

use crate::color::VertexName;
use crate::error::{Error, Result};
use crate::graph::EdgeList;


fn parse_error(line:usize, reason:impl Into<String>) -> Error {
    Error::Parse { line, reason: reason.into() }
}

/// reads two numbers separated by spaces
fn read_two_integers(s:&str) -> IResult<&str, (u32,u32)> {
    terminated(separated_pair(read_u32, space1, read_u32), space0)(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (u32,u32)> {
    preceded(alt((tag("p edge "), tag("p col "))), read_two_integers)(s)
}

/// reads an edge line (vertex names are kept as they are)
pub fn read_edge(s:&str) -> IResult<&str, (VertexName,VertexName)> {
    preceded(tag("e "), read_two_integers)(s)
}

fn is_comment(line:&str) -> bool { line.starts_with('c') }

/**
parses a DIMACS edge list:
 - leading comment lines (starting with `c`) are skipped
 - header `p edge N M` (or `p col N M`), with N > 0 and M > 0
 - exactly M lines `e A B` with A ≠ B. Lines after the M-th edge are ignored.
*/
pub fn parse_edge_list(content:&str) -> Result<EdgeList> {
    let mut lines = content.lines()
        .map(|l| l.trim_end_matches('\r'))
        .enumerate()
        .map(|(i,l)| (i+1, l));
    let (header_line, header) = lines.by_ref()
        .find(|(_,l)| !is_comment(l))
        .ok_or_else(|| parse_error(content.lines().count() + 1, "missing `p edge` header"))?;
    let (_,(n,m)) = all_consuming(read_header)(header)
        .map_err(|_| parse_error(header_line, "expected `p edge <vertices> <edges>`"))?;
    if n == 0 || m == 0 {
        return Err(parse_error(header_line, "the graph needs at least one vertex and one edge"));
    }
    let m = m as usize;
    let mut edges = Vec::new();
    edges.try_reserve_exact(m.min(content.len()))?;
    let mut last_line = header_line;
    for found in 0..m {
        let (line_no, line) = lines.next()
            .ok_or_else(|| parse_error(last_line + 1, format!("expected {} edges, found {}", m, found)))?;
        let (_,(a,b)) = all_consuming(read_edge)(line)
            .map_err(|_| parse_error(line_no, "expected `e <vertex> <vertex>`"))?;
        if a == b {
            return Err(parse_error(line_no, format!("self-loop on vertex {}", a)));
        }
        edges.push((a,b));
        last_line = line_no;
    }
    Ok(EdgeList { nb_vertices: n as usize, nb_edges: m, edges })
}

/// reads an edge list from a DIMACS file
pub fn read_from_file(filename:&str) -> Result<EdgeList> {
    let content = fs::read_to_string(filename)?;
    parse_edge_list(&content)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error_line(s:&str) -> usize {
        match parse_edge_list(s) {
            Err(Error::Parse { line, .. }) => line,
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_instance() {
        let list = read_from_file("insts/grid2x2").unwrap();
        assert_eq!(list.nb_vertices, 4);
        assert_eq!(list.nb_edges, 4);
        assert_eq!(list.edges[0], (1,2));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(read_from_file("insts/does-not-exist"), Err(Error::Io(_))));
    }

    #[test]
    fn test_read_header() {
        let s = "p edge 2 1\ne 1 2";
        assert_eq!(read_header(s).unwrap().0, "\ne 1 2");
        assert_eq!(read_header(s).unwrap().1, (2,1));
    }

    #[test]
    fn test_read_header_col() {
        assert_eq!(read_header("p col 2 1").unwrap().1, (2,1));
    }

    #[test]
    fn test_read_edge() {
        let s = "e 1 2";
        assert_eq!(read_edge(s).unwrap().1, (1,2));
        assert_eq!(read_edge(s).unwrap().0, "");
    }

    #[test]
    fn test_comments_and_crlf() {
        let s = "c this is a test comment\r\nc another one\r\np edge 3 2\r\ne 10 20\r\ne 20 30\r\n";
        let list = parse_edge_list(s).unwrap();
        assert_eq!(list, EdgeList { nb_vertices: 3, nb_edges: 2, edges: vec![(10,20), (20,30)] });
    }

    #[test]
    fn test_extra_lines_ignored() {
        let list = parse_edge_list("p edge 2 1\ne 1 2\nwhatever\n").unwrap();
        assert_eq!(list.edges, vec![(1,2)]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_error_line("c only comments\n"), 2);
        assert_eq!(parse_error_line("p edge 0 1\ne 1 2\n"), 1);
        assert_eq!(parse_error_line("p edge 2 0\n"), 1);
        assert_eq!(parse_error_line("p edges 2 1\ne 1 2\n"), 1);
        assert_eq!(parse_error_line("c\np edge 2 1\ne 1 x\n"), 3);
        assert_eq!(parse_error_line("p edge 3 2\ne 1 2\n"), 3);
        assert_eq!(parse_error_line("p edge 2 2\ne 1 2\ne 5 5\n"), 3);
        assert_eq!(parse_error_line("p edge 2 1\nc late comment\ne 1 2\n"), 2);
    }
}
