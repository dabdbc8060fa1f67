use crate::alignment::similarity::similarity;
use crate::config::AlignConfig;
use crate::types::{Group, HypWord, RefToken};

#[derive(Debug, Clone, Copy)]
struct Backpointer {
    i0: usize,
    j0: usize,
    hyp_len: usize,
    ref_len: usize,
}

/// Minimum-cost monotone partition of both token streams into groups of at
/// most `max_hyp_span` x `max_ref_span` tokens.
///
/// Edit-distance-style DP over prefix pairs `(i, j)`: every transition
/// consumes at least one token on each side, so the result partitions both
/// streams exactly with no gaps and no reordering. `O(n*m*H*R)` time,
/// `O(n*m)` space.
pub fn align_groups(hyp: &[HypWord], reference: &[RefToken], config: &AlignConfig) -> Vec<Group> {
    let n = hyp.len();
    let m = reference.len();
    let width = m + 1;

    let mut cost = vec![f64::INFINITY; (n + 1) * width];
    let mut back: Vec<Option<Backpointer>> = vec![None; (n + 1) * width];
    cost[0] = 0.0;

    for i in 0..=n {
        for j in 0..=m {
            let cur = cost[i * width + j];
            if !cur.is_finite() {
                continue;
            }
            for hyp_len in 1..=config.max_hyp_span.min(n - i) {
                for ref_len in 1..=config.max_ref_span.min(m - j) {
                    let step = group_cost(
                        &hyp[i..i + hyp_len],
                        &reference[j..j + ref_len],
                        config,
                    );
                    let candidate = cur + step;
                    let target = (i + hyp_len) * width + (j + ref_len);
                    if candidate < cost[target] {
                        cost[target] = candidate;
                        back[target] = Some(Backpointer {
                            i0: i,
                            j0: j,
                            hyp_len,
                            ref_len,
                        });
                    }
                }
            }
        }
    }

    backtrack(&back, n, m, width)
}

/// Cost of matching one candidate group: text dissimilarity of the joined
/// normalized sides, plus penalties for group size and imbalance.
fn group_cost(hyp: &[HypWord], reference: &[RefToken], config: &AlignConfig) -> f64 {
    let hyp_joined: String = hyp.iter().map(|w| w.norm.as_str()).collect();
    let ref_joined: String = reference.iter().map(|t| t.norm.as_str()).collect();
    let base = 1.0 - similarity(&hyp_joined, &ref_joined);
    let span_penalty = config.group_penalty * (hyp.len() + reference.len() - 2) as f64;
    let imbalance_penalty = config.size_penalty * hyp.len().abs_diff(reference.len()) as f64;
    base + span_penalty + imbalance_penalty
}

fn backtrack(back: &[Option<Backpointer>], n: usize, m: usize, width: usize) -> Vec<Group> {
    let mut groups = Vec::new();

    if back[n * width + m].is_none() {
        // Unreachable final cell: one stream is empty, or the streams are so
        // lopsided that no sequence of bounded groups spans both. Degrade to
        // a one-to-one zip of the shared prefix; hypothesis excess is
        // dropped, reference excess is left for the trailer.
        if n.min(m) > 0 {
            tracing::warn!(
                hyp_words = n,
                ref_tokens = m,
                "alignment: no grouped path found, using pairwise fallback"
            );
        }
        for k in 0..n.min(m) {
            groups.push(Group {
                hyp_start: k,
                hyp_len: 1,
                ref_start: k,
                ref_len: 1,
            });
        }
        return groups;
    }

    let mut i = n;
    let mut j = m;
    while i > 0 && j > 0 {
        let bp = back[i * width + j].unwrap_or(Backpointer {
            i0: i - 1,
            j0: j - 1,
            hyp_len: 1,
            ref_len: 1,
        });
        groups.push(Group {
            hyp_start: bp.i0,
            hyp_len: bp.hyp_len,
            ref_start: bp.j0,
            ref_len: bp.ref_len,
        });
        i = bp.i0;
        j = bp.j0;
    }
    groups.reverse();
    groups
}
