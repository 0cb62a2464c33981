//! Console prompts for the interactive driver.
//!
//! Every question re-asks until the answer is valid. Reading and writing go
//! through generic `BufRead`/`Write` so the loops run against in-memory buffers
//! in tests.

use std::io::{BufRead, Write};

use crate::rt_graph::Graph;
use crate::rt_interface::{NodeId, Result, RouteError};
use crate::rt_session::SessionConfig;
use crate::rt_solver::{PathResult, Protocol};

/// What to do after a route has been shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    Quit,
    Continue,
}

pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RouteError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask `first`, then `retry` until `parse` accepts the answer
    fn ask_until<T>(
        &mut self,
        first: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        let mut answer = self.ask(first)?;
        loop {
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            answer = self.ask(retry)?;
        }
    }

    pub fn protocol(&mut self) -> Result<Protocol> {
        self.ask_until(
            "Select routing protocol: (1) Link-State or (2) Distance-Vector: ",
            "Please enter '1' for Link-State or '2' for Distance-Vector: ",
            |s| s.parse().ok(),
        )
    }

    pub fn node_count(&mut self) -> Result<usize> {
        self.ask_until(
            "Enter the number of nodes (N): ",
            "Please enter a valid number of nodes (N >= 2): ",
            |s| s.parse::<usize>().ok().filter(|&n| n >= 2),
        )
    }

    /// One cap per node, each in `[1, node_count - 1]`
    pub fn degree_caps(&mut self, node_count: usize) -> Result<Vec<usize>> {
        let mut caps = Vec::with_capacity(node_count);
        for node in 0..node_count {
            let cap = self.ask_until(
                &format!(
                    "Enter max connections for node {} (less than {}): ",
                    node, node_count
                ),
                &format!(
                    "Please enter a valid max connections for node {} (1 <= M < {}): ",
                    node, node_count
                ),
                |s| s.parse::<usize>().ok().filter(|&m| m >= 1 && m < node_count),
            )?;
            caps.push(cap);
        }
        Ok(caps)
    }

    /// Protocol, node count and caps, in that order
    pub fn session_config(&mut self) -> Result<SessionConfig> {
        let protocol = self.protocol()?;
        let node_count = self.node_count()?;
        let degree_caps = self.degree_caps(node_count)?;
        Ok(SessionConfig {
            protocol,
            node_count,
            degree_caps,
        })
    }

    fn node(&mut self, label: &str, node_count: usize) -> Result<NodeId> {
        let last = node_count.saturating_sub(1);
        self.ask_until(
            &format!("Enter {} node (0 to {}): ", label, last),
            &format!("Please enter a valid {} node (0 to {}): ", label, last),
            |s| s.parse::<NodeId>().ok().filter(|&v| v < node_count),
        )
    }

    /// Start and end node, both in `[0, node_count)`
    pub fn endpoints(&mut self, node_count: usize) -> Result<(NodeId, NodeId)> {
        let start = self.node("initial", node_count)?;
        let end = self.node("end", node_count)?;
        Ok((start, end))
    }

    pub fn next_action(&mut self) -> Result<NextAction> {
        let answer = self.ask("\nPress 'q' to quit or any other key to calculate a new path: ")?;
        if answer.eq_ignore_ascii_case("q") {
            Ok(NextAction::Quit)
        } else {
            Ok(NextAction::Continue)
        }
    }

    pub fn wants_new_graph(&mut self) -> Result<bool> {
        let answer = self.ask("Do you want to generate a new graph? (y/n): ")?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    pub fn show_graph(&mut self, graph: &Graph) -> Result<()> {
        writeln!(self.output, "\nGenerated graph (Adjacency list with weights):")?;
        write!(self.output, "{}", graph)?;
        Ok(())
    }

    pub fn show_result(&mut self, start: NodeId, end: NodeId, result: &PathResult) -> Result<()> {
        if !result.is_reachable() {
            writeln!(
                self.output,
                "\nNo path exists from node {} to node {}.",
                start, end
            )?;
            return Ok(());
        }

        let hops: Vec<String> = result.path.iter().map(ToString::to_string).collect();
        writeln!(
            self.output,
            "\nThe minimum path from node {} to node {} is: {}",
            start,
            end,
            hops.join(" -> ")
        )?;
        writeln!(self.output, "The total weight is: {}", result.total_weight)?;
        Ok(())
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_protocol_reasks_until_valid() {
        let mut p = prompter("x\n3\n2\n");
        assert_eq!(p.protocol().unwrap(), Protocol::DistanceVector);

        let out = output(p);
        assert_eq!(out.matches("Please enter '1'").count(), 2);
    }

    #[test]
    fn test_node_count_rejects_small_and_garbage() {
        let mut p = prompter("1\n-4\nabc\n 5 \n");
        assert_eq!(p.node_count().unwrap(), 5);
    }

    #[test]
    fn test_degree_caps_bounded() {
        let mut p = prompter("0\n1\n3\n2\n2\n");
        assert_eq!(p.degree_caps(3).unwrap(), vec![1, 2, 2]);

        let out = output(p);
        assert!(out.contains("Enter max connections for node 2 (less than 3): "));
        assert!(out.contains("(1 <= M < 3)"));
    }

    #[test]
    fn test_session_config_in_order() {
        let mut p = prompter("1\n3\n1\n2\n1\n");
        let config = p.session_config().unwrap();
        assert_eq!(config.protocol, Protocol::LinkState);
        assert_eq!(config.node_count, 3);
        assert_eq!(config.degree_caps, vec![1, 2, 1]);
    }

    #[test]
    fn test_endpoints_in_range() {
        let mut p = prompter("4\n0\n9\n3\n");
        assert_eq!(p.endpoints(4).unwrap(), (0, 3));

        let out = output(p);
        assert!(out.contains("Please enter a valid initial node (0 to 3): "));
        assert!(out.contains("Please enter a valid end node (0 to 3): "));
    }

    #[test]
    fn test_closed_input() {
        let mut p = prompter("abc\n");
        assert!(matches!(p.node_count(), Err(RouteError::InputClosed)));
    }

    #[test]
    fn test_menu_answers() {
        let mut p = prompter("Q\nn\ny\n");
        assert_eq!(p.next_action().unwrap(), NextAction::Quit);
        assert!(p.next_action().unwrap() == NextAction::Continue);
        assert!(p.wants_new_graph().unwrap());
    }

    #[test]
    fn test_show_result_text() {
        let mut p = prompter("");
        let result = PathResult {
            path: vec![0, 1, 2],
            total_weight: 8,
        };
        p.show_result(0, 2, &result).unwrap();
        p.show_result(0, 3, &PathResult::unreachable()).unwrap();

        let out = output(p);
        assert!(out.contains("The minimum path from node 0 to node 2 is: 0 -> 1 -> 2\n"));
        assert!(out.contains("The total weight is: 8\n"));
        assert!(out.contains("No path exists from node 0 to node 3."));
    }
}
