use std::collections::{BTreeSet, HashMap, VecDeque};

use proptest::prelude::*;
use rmbc_color::collections::dict::Dict;
use rmbc_color::collections::list::LinkedList;
use rmbc_color::color::checker;
use rmbc_color::graph::{EdgeList, Graph};
use rmbc_color::search::bipartite::Bipartition;
use rmbc_color::search::order::VertexOrder;

/// vertex names are sparse, not 0..n
fn name(i:u32) -> u32 { i * 7 + 3 }

fn edge_list(nb_vertices:u32, raw:Vec<(u32,u32)>) -> Option<EdgeList> {
    let edges:BTreeSet<(u32,u32)> = raw.into_iter()
        .map(|(a,b)| (a % nb_vertices, b % nb_vertices))
        .filter(|(a,b)| a != b)
        .map(|(a,b)| (name(a.min(b)), name(a.max(b))))
        .collect();
    if edges.is_empty() { return None; }
    Some(EdgeList::new(edges.into_iter().collect()))
}

fn arb_graph() -> impl Strategy<Value = Graph> {
    (2u32..24, proptest::collection::vec((any::<u32>(), any::<u32>()), 1..60))
        .prop_filter_map("no edge left", |(n, raw)| edge_list(n, raw))
        .prop_map(|list| Graph::from_edge_list(&list).unwrap())
}

/// every edge joins the two parts
fn arb_bipartite_graph() -> impl Strategy<Value = Graph> {
    (1u32..12, 1u32..12, proptest::collection::vec((any::<u32>(), any::<u32>()), 1..40))
        .prop_map(|(left, right, raw)| {
            let edges:BTreeSet<(u32,u32)> = raw.into_iter()
                .map(|(a,b)| (name(a % left), name(left + b % right)))
                .collect();
            let list = EdgeList::new(edges.into_iter().collect());
            Graph::from_edge_list(&list).unwrap()
        })
}

#[derive(Debug, Clone)]
enum Operation {
    Reorder(usize),
    SwitchVertices(usize, usize),
    SwitchColors(usize, usize),
    Greedy,
    Bipartite,
}

fn arb_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (0..VertexOrder::ALL.len()).prop_map(Operation::Reorder),
        (any::<usize>(), any::<usize>()).prop_map(|(i,j)| Operation::SwitchVertices(i,j)),
        (any::<usize>(), any::<usize>()).prop_map(|(i,j)| Operation::SwitchColors(i,j)),
        Just(Operation::Greedy),
        Just(Operation::Bipartite),
    ]
}

fn is_permutation(order:&[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    order.iter().all(|&id| id < seen.len() && !std::mem::replace(&mut seen[id], true))
}

fn colors(graph:&Graph) -> Vec<Option<usize>> {
    graph.vertices().iter().map(|v| v.color()).collect()
}

proptest! {
    #[test]
    fn test_operations_keep_graph_consistent(
        mut graph in arb_graph(),
        ops in proptest::collection::vec(arb_operation(), 1..40)
    ) {
        let n = graph.nb_vertices();
        prop_assert_eq!(checker(&graph), Some(graph.nb_colors()));
        for op in ops {
            match op {
                Operation::Reorder(k) => graph.reorder(VertexOrder::ALL[k]).unwrap(),
                Operation::SwitchVertices(i,j) => graph.switch_vertices(i % n, j % n).unwrap(),
                Operation::SwitchColors(i,j) => {
                    let k = graph.nb_colors();
                    graph.switch_colors(i % k, j % k).unwrap();
                }
                Operation::Greedy => { graph.greedy(); }
                Operation::Bipartite => { graph.bipartite(); }
            }
            prop_assert!(is_permutation(graph.order()));
            prop_assert_eq!(checker(&graph), Some(graph.nb_colors()), "after {:?}", op);
        }
    }

    #[test]
    fn test_greedy_color_bound(mut graph in arb_graph(), k in 0..VertexOrder::ALL.len()) {
        graph.reorder(VertexOrder::ALL[k]).unwrap();
        let nb_colors = graph.greedy();
        prop_assert!(nb_colors >= 2);
        prop_assert!(nb_colors <= graph.max_degree() + 1);
        prop_assert_eq!(graph.color_class_sizes().iter().sum::<usize>(), graph.nb_vertices());
    }

    #[test]
    fn test_reorder_idempotent(mut graph in arb_graph(), k in 0..VertexOrder::ALL.len()) {
        graph.reorder(VertexOrder::ALL[k]).unwrap();
        let first = graph.order().to_vec();
        graph.reorder(VertexOrder::ALL[k]).unwrap();
        prop_assert_eq!(graph.order(), &first[..]);
    }

    #[test]
    fn test_switch_vertices_involution(mut graph in arb_graph(), i in any::<usize>(), j in any::<usize>()) {
        let n = graph.nb_vertices();
        let (i, j) = (i % n, j % n);
        let before = graph.order().to_vec();
        graph.switch_vertices(i, j).unwrap();
        prop_assert_eq!(graph.order()[i], before[j]);
        prop_assert_eq!(graph.order()[j], before[i]);
        graph.switch_vertices(i, j).unwrap();
        prop_assert_eq!(graph.order(), &before[..]);
        prop_assert!(graph.switch_vertices(n, 0).is_err());
        prop_assert_eq!(graph.order(), &before[..]);
    }

    #[test]
    fn test_switch_colors_relabels(mut graph in arb_graph(), i in any::<usize>(), j in any::<usize>()) {
        let k = graph.nb_colors();
        let (i, j) = (i % k, j % k);
        let before = colors(&graph);
        let sizes = graph.color_class_sizes().to_vec();
        graph.switch_colors(i, j).unwrap();
        for (old, new) in before.iter().zip(colors(&graph)) {
            let expected = match *old {
                Some(c) if c == i => Some(j),
                Some(c) if c == j => Some(i),
                other => other,
            };
            prop_assert_eq!(new, expected);
        }
        prop_assert_eq!(graph.color_class_sizes()[i], sizes[j]);
        prop_assert_eq!(graph.color_class_sizes()[j], sizes[i]);
        prop_assert!(graph.switch_colors(k, 0).is_err());
    }

    #[test]
    fn test_small_to_large_blocks(mut graph in arb_graph()) {
        graph.reorder(VertexOrder::RmbcSmallToLarge).unwrap();
        let sizes = graph.color_class_sizes().to_vec();
        let mut position = 0;
        let mut previous:Option<(usize, usize)> = None;
        while position < graph.nb_vertices() {
            let c = graph.color_at(position).unwrap().unwrap();
            if let Some((prev_color, prev_size)) = previous {
                prop_assert!(prev_size < sizes[c] || (prev_size == sizes[c] && prev_color < c));
            }
            let block = &graph.order()[position..position + sizes[c]];
            prop_assert!(block.windows(2).all(|w| w[0] < w[1]));
            for k in position..position + sizes[c] {
                prop_assert_eq!(graph.color_at(k).unwrap(), Some(c));
            }
            previous = Some((c, sizes[c]));
            position += sizes[c];
        }
    }

    #[test]
    fn test_rmbc_never_needs_more_colors(mut graph in arb_graph(), k in 0..VertexOrder::RMBC.len()) {
        let before = graph.nb_colors();
        graph.reorder(VertexOrder::RMBC[k]).unwrap();
        prop_assert!(graph.greedy() <= before);
    }

    #[test]
    fn test_bipartite_graphs_get_two_colors(mut graph in arb_bipartite_graph()) {
        let order = graph.order().to_vec();
        prop_assert!(graph.is_bipartite());
        prop_assert_eq!(graph.bipartite(), Bipartition::Bipartite);
        prop_assert_eq!(graph.nb_colors(), 2);
        prop_assert_eq!(graph.order(), &order[..]);
        prop_assert_eq!(checker(&graph), Some(2));
    }

    #[test]
    fn test_bipartite_agrees_with_greedy_on_two_colors(mut graph in arb_graph()) {
        let outcome = graph.bipartite();
        prop_assert_ne!(outcome, Bipartition::Degraded);
        if !outcome.is_bipartite() {
            prop_assert!(graph.nb_colors() >= 3);
        }
        prop_assert_eq!(checker(&graph), Some(graph.nb_colors()));
    }

    #[test]
    fn test_copy_is_independent(graph in arb_graph(), i in any::<usize>(), j in any::<usize>()) {
        let order = graph.order().to_vec();
        let before = colors(&graph);
        let mut copy = graph.clone();
        let n = copy.nb_vertices();
        copy.switch_vertices(i % n, j % n).unwrap();
        copy.reorder(VertexOrder::WelshPowell).unwrap();
        copy.greedy();
        copy.switch_colors(0, 1).unwrap();
        prop_assert_eq!(graph.order(), &order[..]);
        prop_assert_eq!(colors(&graph), before);
        prop_assert_eq!(checker(&graph), Some(graph.nb_colors()));
    }

    #[test]
    fn test_dict_matches_std_map(ops in proptest::collection::vec((any::<bool>(), 0u16..300, any::<u32>()), 1..400)) {
        let mut std_map = HashMap::new();
        let mut dict = Dict::new().unwrap();
        for (insert, k, v) in ops {
            let key = k.to_string();
            if insert {
                prop_assert_eq!(dict.put(&key, v).unwrap(), std_map.insert(key.clone(), v));
            } else {
                prop_assert_eq!(dict.remove(&key), std_map.remove(&key));
            }
            prop_assert_eq!(dict.len(), std_map.len());
        }
        for (k, v) in &std_map {
            prop_assert_eq!(dict.get(k), Some(v));
        }
        prop_assert_eq!(dict.iter().count(), std_map.len());
    }

    #[test]
    fn test_list_matches_std_deque(ops in proptest::collection::vec((0u8..3, any::<i32>()), 1..200)) {
        let mut deque = VecDeque::new();
        let mut list = LinkedList::new();
        for (op, v) in ops {
            match op {
                0 => { list.push_back(v).unwrap(); deque.push_back(v); }
                1 => { list.push_front(v).unwrap(); deque.push_front(v); }
                _ => prop_assert_eq!(list.pop_front(), deque.pop_front()),
            }
            prop_assert_eq!(list.len(), deque.len());
            prop_assert_eq!(list.peek_front(), deque.front());
            prop_assert_eq!(list.peek_back(), deque.back());
        }
        let items:Vec<i32> = list.iter().copied().collect();
        prop_assert_eq!(items, deque.into_iter().collect::<Vec<_>>());
    }
}
