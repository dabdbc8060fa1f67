use crate::config::AlignConfig;
use crate::types::{CorrectedWord, Group, HypWord, RefToken};

/// Turn matched groups into corrected words with concrete timings, then
/// append trailer words for any reference tokens no group consumed.
///
/// Timing rules per group (`g_start`/`g_end` are the min start / max end of
/// the group's hypothesis words, clamped so starts never run backwards):
/// - one reference token: a single word spanning the whole group;
/// - several reference tokens from one hypothesis word: the span is split
///   proportionally to normalized character length, last word pinned to
///   `g_end` so rounding cannot drift;
/// - several-to-several: equal-width slices in token order.
/// Synthesized words carry confidence 1.0; once a reference match is
/// accepted the recognizer's own confidence no longer applies.
pub fn synthesize_words(
    groups: &[Group],
    hyp: &[HypWord],
    reference: &[RefToken],
    config: &AlignConfig,
) -> Vec<CorrectedWord> {
    let mut out: Vec<CorrectedWord> = Vec::with_capacity(reference.len());
    let mut prev_end: Option<f64> = None;

    for group in groups {
        let hyp_slice = &hyp[group.hyp_start..group.hyp_start + group.hyp_len];
        let ref_slice = &reference[group.ref_start..group.ref_start + group.ref_len];

        let mut g_start = hyp_slice
            .iter()
            .map(|w| w.start_sec)
            .fold(f64::INFINITY, f64::min);
        let mut g_end = hyp_slice
            .iter()
            .map(|w| w.end_sec)
            .fold(f64::NEG_INFINITY, f64::max);
        if let Some(prev) = prev_end {
            if g_start < prev {
                g_start = prev;
            }
        }
        if g_end < g_start {
            g_end = g_start;
        }
        tracing::debug!(
            hyp_len = group.hyp_len,
            ref_len = group.ref_len,
            g_start,
            g_end,
            "timing: group window"
        );

        if group.ref_len == 1 {
            out.push(CorrectedWord {
                word: ref_slice[0].raw.clone(),
                start_sec: g_start,
                end_sec: g_end,
                confidence: 1.0,
            });
        } else if group.hyp_len == 1 {
            split_proportional(ref_slice, g_start, g_end, &mut out);
        } else {
            split_equal(ref_slice, g_start, g_end, &mut out);
        }

        prev_end = out.last().map(|w| w.end_sec);
    }

    let consumed: usize = groups.iter().map(|g| g.ref_len).sum();
    append_trailer(&reference[consumed.min(reference.len())..], prev_end, config, &mut out);
    out
}

/// Slice `[g_start, g_end]` across reference tokens proportionally to each
/// token's normalized length; longer words get wider slices.
fn split_proportional(
    ref_slice: &[RefToken],
    g_start: f64,
    g_end: f64,
    out: &mut Vec<CorrectedWord>,
) {
    let total: usize = ref_slice.iter().map(|t| t.norm.len()).sum();
    let total = if total == 0 { ref_slice.len() } else { total };
    let mut cur = g_start;
    for (k, token) in ref_slice.iter().enumerate() {
        let frac = token.norm.len().max(1) as f64 / total as f64;
        let next = if k == ref_slice.len() - 1 {
            g_end
        } else {
            (cur + frac * (g_end - g_start)).min(g_end)
        };
        out.push(CorrectedWord {
            word: token.raw.clone(),
            start_sec: cur,
            end_sec: next,
            confidence: 1.0,
        });
        cur = next;
    }
}

fn split_equal(ref_slice: &[RefToken], g_start: f64, g_end: f64, out: &mut Vec<CorrectedWord>) {
    let count = ref_slice.len();
    let step = (g_end - g_start) / count as f64;
    for (k, token) in ref_slice.iter().enumerate() {
        let start = g_start + k as f64 * step;
        let end = if k == count - 1 {
            g_end
        } else {
            g_start + (k + 1) as f64 * step
        };
        out.push(CorrectedWord {
            word: token.raw.clone(),
            start_sec: start,
            end_sec: end,
            confidence: 1.0,
        });
    }
}

/// Synthetic continuation for reference tokens the aligner never consumed
/// (reachable only through the degraded fallback path). Each word spans a
/// fixed slot and is marked low-confidence so downstream rendering can tell
/// it apart from genuine alignment output.
fn append_trailer(
    remaining: &[RefToken],
    prev_end: Option<f64>,
    config: &AlignConfig,
    out: &mut Vec<CorrectedWord>,
) {
    if remaining.is_empty() {
        return;
    }
    tracing::debug!(
        remaining = remaining.len(),
        "timing: appending trailer for unconsumed reference tokens"
    );
    let mut cur = prev_end.unwrap_or(0.0);
    for token in remaining {
        out.push(CorrectedWord {
            word: token.raw.clone(),
            start_sec: cur,
            end_sec: cur + config.trailer_word_sec,
            confidence: config.trailer_confidence,
        });
        cur += config.trailer_word_sec;
    }
}
