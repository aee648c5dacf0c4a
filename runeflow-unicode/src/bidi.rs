//! Unicode Bidirectional Algorithm (UAX #9)
//!
//! Text is split into paragraphs at B, each paragraph runs through the
//! explicit (X), weak (W), neutral (N) and implicit (I) rules, then each line
//! is reordered (L1, L2). Characters removed by X9 are moved behind the
//! reordered text.

use crate::ucd::{self, BidiClass, BracketType, DecompositionTag, GeneralCategory, REPLACEMENT_CHARACTER};
use serde::{Deserialize, Serialize};
use std::ops::Range;

const MAX_DEPTH: i8 = 125;
const MAX_BRACKET_PAIRS: usize = 63;

/// How the paragraph direction is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BidiDirectionMode {
    /// Always left-to-right.
    Ltr,
    /// Always right-to-left.
    Rtl,
    /// From the first strong character, left-to-right if there is none.
    #[default]
    AutoLtr,
    /// From the first strong character, right-to-left if there is none.
    AutoRtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BidiContext {
    pub direction_mode: BidiDirectionMode,
    /// Resolve paired brackets (N0) and substitute mirrored glyphs (L4).
    pub enable_mirrored_brackets: bool,
    /// Treat U+2028 LINE SEPARATOR as the end of a line for L1 and L2.
    pub enable_line_separator: bool,
}

impl Default for BidiContext {
    fn default() -> Self {
        Self {
            direction_mode: BidiDirectionMode::AutoLtr,
            enable_mirrored_brackets: true,
            enable_line_separator: true,
        }
    }
}

impl BidiContext {
    /// Automatic detection, falling back to `direction`.
    pub fn new(direction: Direction) -> Self {
        let direction_mode = match direction {
            Direction::LeftToRight => BidiDirectionMode::AutoLtr,
            Direction::RightToLeft => BidiDirectionMode::AutoRtl,
        };
        Self { direction_mode, ..Self::default() }
    }
}

/// Resolved writing direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl Direction {
    fn from_level(level: i8) -> Self {
        if level % 2 == 0 { Self::LeftToRight } else { Self::RightToLeft }
    }

    pub fn is_left_to_right(self) -> bool {
        self == Self::LeftToRight
    }
}

fn class_from_level(level: i8) -> BidiClass {
    if level % 2 == 0 { BidiClass::L } else { BidiClass::R }
}

#[derive(Debug, Clone, Copy)]
struct CharInfo {
    /// Position in the original text.
    index: usize,
    code_point: char,
    embedding_level: i8,
    /// Current class, rewritten by the rules.
    direction: BidiClass,
    /// Class from the UCD.
    bidi_class: BidiClass,
    bracket_type: BracketType,
}

impl CharInfo {
    fn new(index: usize, code_point: char) -> Self {
        let bidi_class = ucd::bidi_class(code_point);
        Self {
            index,
            code_point,
            embedding_level: 0,
            direction: bidi_class,
            bidi_class,
            bracket_type: ucd::bidi_bracket_type(code_point),
        }
    }

    fn from_class(index: usize, bidi_class: BidiClass) -> Self {
        Self {
            index,
            code_point: REPLACEMENT_CHARACTER,
            embedding_level: 0,
            direction: bidi_class,
            bidi_class,
            bracket_type: BracketType::N,
        }
    }

    fn is_line_separator(&self) -> bool {
        self.code_point != REPLACEMENT_CHARACTER
            && ucd::general_category(self.code_point) == GeneralCategory::Zl
    }
}

// P2, P3

fn default_paragraph_class(context: &BidiContext) -> BidiClass {
    match context.direction_mode {
        BidiDirectionMode::AutoRtl | BidiDirectionMode::Rtl => BidiClass::R,
        BidiDirectionMode::AutoLtr | BidiDirectionMode::Ltr => BidiClass::L,
    }
}

/// P2: the first strong class outside isolates.
///
/// With `rule_x5c` the scan stops at the PDI matching an FSI.
fn rule_p2(chars: &[CharInfo], context: &BidiContext, rule_x5c: bool) -> BidiClass {
    use BidiClass::*;

    match context.direction_mode {
        BidiDirectionMode::Ltr => return L,
        BidiDirectionMode::Rtl => return R,
        _ => {}
    }

    let mut isolate_level = 0usize;
    for c in chars {
        match c.direction {
            L | AL | R if isolate_level == 0 => return c.direction,
            LRI | RLI | FSI => isolate_level += 1,
            PDI if isolate_level > 0 => isolate_level -= 1,
            PDI if rule_x5c => break,
            _ => {}
        }
    }
    default_paragraph_class(context)
}

/// P3: paragraph embedding level.
fn rule_p3(paragraph_class: BidiClass) -> i8 {
    i8::from(matches!(paragraph_class, BidiClass::AL | BidiClass::R))
}

// X1 - X8

#[derive(Debug, Clone, Copy)]
struct StackEntry {
    embedding_level: i8,
    override_status: Option<BidiClass>,
    isolate_status: bool,
}

fn next_odd(level: i8) -> i8 {
    if level % 2 == 1 { level + 2 } else { level + 1 }
}

fn next_even(level: i8) -> i8 {
    if level % 2 == 0 { level + 2 } else { level + 1 }
}

fn rules_x1_x8(chars: &mut [CharInfo], paragraph_level: i8, context: &BidiContext) {
    use BidiClass::*;

    let mut overflow_isolate_count = 0usize;
    let mut overflow_embedding_count = 0usize;
    let mut valid_isolate_count = 0usize;

    let mut stack = Vec::with_capacity(MAX_DEPTH as usize + 2);
    stack.push(StackEntry { embedding_level: paragraph_level, override_status: None, isolate_status: false });

    for i in 0..chars.len() {
        let Some(&top) = stack.last() else { break };
        let odd = next_odd(top.embedding_level);
        let even = next_even(top.embedding_level);

        // X2 - X5
        let embedding = match chars[i].direction {
            RLE => Some((odd, None)),
            LRE => Some((even, None)),
            RLO => Some((odd, Some(R))),
            LRO => Some((even, Some(L))),
            _ => None,
        };
        if let Some((level, override_status)) = embedding {
            if level <= MAX_DEPTH && overflow_isolate_count == 0 && overflow_embedding_count == 0 {
                stack.push(StackEntry { embedding_level: level, override_status, isolate_status: false });
            } else if overflow_isolate_count == 0 {
                overflow_embedding_count += 1;
            }
            continue;
        }

        match chars[i].direction {
            RLI | LRI | FSI => {
                // X5a - X5c
                let rtl = match chars[i].direction {
                    RLI => true,
                    LRI => false,
                    _ => {
                        let sub_context = BidiContext { direction_mode: BidiDirectionMode::AutoLtr, ..*context };
                        rule_p3(rule_p2(&chars[i + 1..], &sub_context, true)) == 1
                    }
                };

                chars[i].embedding_level = top.embedding_level;
                if let Some(override_status) = top.override_status {
                    chars[i].direction = override_status;
                }

                let level = if rtl { odd } else { even };
                if level <= MAX_DEPTH && overflow_isolate_count == 0 && overflow_embedding_count == 0 {
                    valid_isolate_count += 1;
                    stack.push(StackEntry { embedding_level: level, override_status: None, isolate_status: true });
                } else {
                    overflow_isolate_count += 1;
                }
            }
            PDI => {
                // X6a
                if overflow_isolate_count > 0 {
                    overflow_isolate_count -= 1;
                } else if valid_isolate_count > 0 {
                    overflow_embedding_count = 0;
                    while stack.last().map(|e| !e.isolate_status).unwrap_or(false) {
                        stack.pop();
                    }
                    stack.pop();
                    valid_isolate_count -= 1;
                }

                let top = stack.last().copied().unwrap_or(top);
                chars[i].embedding_level = top.embedding_level;
                if let Some(override_status) = top.override_status {
                    chars[i].direction = override_status;
                }
            }
            PDF => {
                // X7
                if overflow_isolate_count == 0 {
                    if overflow_embedding_count > 0 {
                        overflow_embedding_count -= 1;
                    } else if !top.isolate_status && stack.len() >= 2 {
                        stack.pop();
                    }
                }
            }
            B => {
                // X8
                chars[i].embedding_level = paragraph_level;
                return;
            }
            BN => {}
            _ => {
                // X6
                chars[i].embedding_level = top.embedding_level;
                if let Some(override_status) = top.override_status {
                    chars[i].direction = override_status;
                }
            }
        }
    }
}

/// X9: stable partition, removed characters last. Returns the number kept.
fn rule_x9(chars: &mut Vec<CharInfo>) -> usize {
    let (kept, removed): (Vec<CharInfo>, Vec<CharInfo>) =
        chars.drain(..).partition(|c| !c.direction.is_removed_by_x9());
    let len = kept.len();
    chars.extend(kept);
    chars.extend(removed);
    len
}

// X10, BD7, BD13

/// BD7: maximal runs of equal embedding level.
fn level_runs(chars: &[CharInfo]) -> Vec<Range<usize>> {
    let mut r = Vec::new();
    let mut start = 0;
    for i in 1..=chars.len() {
        if i == chars.len() || chars[i].embedding_level != chars[start].embedding_level {
            if i > start {
                r.push(start..i);
            }
            start = i;
        }
    }
    r
}

#[derive(Debug)]
struct IsolatedRunSequence {
    /// Positions into the paragraph, in logical order.
    indices: Vec<usize>,
    embedding_level: i8,
    sos: BidiClass,
    eos: BidiClass,
}

impl IsolatedRunSequence {
    fn embedding_direction(&self) -> BidiClass {
        class_from_level(self.embedding_level)
    }
}

fn ends_with_isolate_initiator(chars: &[CharInfo], run: &Range<usize>) -> bool {
    run.end > run.start
        && matches!(chars[run.end - 1].bidi_class, BidiClass::LRI | BidiClass::RLI | BidiClass::FSI)
}

fn starts_with_pdi(chars: &[CharInfo], run: &Range<usize>) -> bool {
    run.end > run.start && chars[run.start].bidi_class == BidiClass::PDI
}

/// BD13: chain level runs across matching isolate initiators and PDIs.
fn isolated_run_sequences(chars: &[CharInfo], mut runs: Vec<Range<usize>>) -> Vec<IsolatedRunSequence> {
    let mut r = Vec::new();

    runs.reverse();
    while let Some(first_run) = runs.pop() {
        let embedding_level = chars[first_run.start].embedding_level;
        let mut last_run = first_run.clone();
        let mut indices: Vec<usize> = first_run.collect();

        while ends_with_isolate_initiator(chars, &last_run) && !runs.is_empty() {
            let mut isolation_level = 1usize;
            let mut found = None;
            for (k, run) in runs.iter().enumerate().rev() {
                if starts_with_pdi(chars, run) {
                    isolation_level -= 1;
                    if isolation_level == 0 {
                        found = Some(k);
                        break;
                    }
                }
                if ends_with_isolate_initiator(chars, run) {
                    isolation_level += 1;
                }
            }

            let Some(k) = found else { break };
            let run = runs.remove(k);
            debug_assert_eq!(chars[run.start].embedding_level, embedding_level);
            indices.extend(run.clone());
            last_run = run;
        }

        r.push(IsolatedRunSequence { indices, embedding_level, sos: BidiClass::L, eos: BidiClass::L });
    }
    r
}

/// X10: start-of-sequence and end-of-sequence types.
fn sos_eos(chars: &[CharInfo], sequence: &IsolatedRunSequence, paragraph_level: i8) -> (BidiClass, BidiClass) {
    let (Some(&first), Some(&last)) = (sequence.indices.first(), sequence.indices.last()) else {
        let class = class_from_level(paragraph_level);
        return (class, class);
    };

    let before = if first > 0 { chars[first - 1].embedding_level } else { paragraph_level };
    let ends_with_isolate = matches!(chars[last].bidi_class, BidiClass::LRI | BidiClass::RLI | BidiClass::FSI);
    let after = if last + 1 < chars.len() && !ends_with_isolate {
        chars[last + 1].embedding_level
    } else {
        paragraph_level
    };

    (
        class_from_level(sequence.embedding_level.max(before)),
        class_from_level(sequence.embedding_level.max(after)),
    )
}

// W1 - W7

fn rule_w1(chars: &mut [CharInfo], sequence: &IsolatedRunSequence) {
    use BidiClass::*;

    let mut previous = sequence.sos;
    for &i in &sequence.indices {
        if chars[i].direction == NSM {
            chars[i].direction = match previous {
                LRI | RLI | FSI | PDI => ON,
                class => class,
            };
        }
        previous = chars[i].direction;
    }
}

fn rule_w2(chars: &mut [CharInfo], sequence: &IsolatedRunSequence) {
    use BidiClass::*;

    let mut last_strong = sequence.sos;
    for &i in &sequence.indices {
        match chars[i].direction {
            R | L | AL => last_strong = chars[i].direction,
            EN if last_strong == AL => chars[i].direction = AN,
            _ => {}
        }
    }
}

fn rule_w3(chars: &mut [CharInfo], sequence: &IsolatedRunSequence) {
    for &i in &sequence.indices {
        if chars[i].direction == BidiClass::AL {
            chars[i].direction = BidiClass::R;
        }
    }
}

fn rule_w4(chars: &mut [CharInfo], sequence: &IsolatedRunSequence) {
    use BidiClass::*;

    for w in sequence.indices.windows(3) {
        let (back2, back1, cur) = (chars[w[0]].direction, chars[w[1]].direction, chars[w[2]].direction);
        if cur == EN && back2 == EN && matches!(back1, ES | CS) {
            chars[w[1]].direction = EN;
        }
        if cur == AN && back2 == AN && back1 == CS {
            chars[w[1]].direction = AN;
        }
    }
}

fn rule_w5(chars: &mut [CharInfo], sequence: &IsolatedRunSequence) {
    use BidiClass::*;

    let mut et_start: Option<usize> = None;
    let mut starts_with_en = false;

    for (k, &i) in sequence.indices.iter().enumerate() {
        match chars[i].direction {
            ET => {
                if starts_with_en {
                    chars[i].direction = EN;
                } else if et_start.is_none() {
                    et_start = Some(k);
                }
            }
            EN => {
                starts_with_en = true;
                if let Some(start) = et_start.take() {
                    for &j in &sequence.indices[start..k] {
                        chars[j].direction = EN;
                    }
                }
            }
            _ => {
                starts_with_en = false;
                et_start = None;
            }
        }
    }
}

fn rule_w6(chars: &mut [CharInfo], sequence: &IsolatedRunSequence) {
    for &i in &sequence.indices {
        if matches!(chars[i].direction, BidiClass::ET | BidiClass::ES | BidiClass::CS) {
            chars[i].direction = BidiClass::ON;
        }
    }
}

fn rule_w7(chars: &mut [CharInfo], sequence: &IsolatedRunSequence) {
    use BidiClass::*;

    let mut last_strong = sequence.sos;
    for &i in &sequence.indices {
        match chars[i].direction {
            R | L => last_strong = chars[i].direction,
            EN if last_strong == L => chars[i].direction = L,
            _ => {}
        }
    }
}

// N0

/// Singleton canonical decomposition, such as U+2329 to U+3008.
fn canonical_equivalent(c: char) -> Option<char> {
    let decomposition = ucd::decomposition(c);
    match decomposition.as_slice() {
        [equivalent] if decomposition.tag == DecompositionTag::Canonical => Some(*equivalent),
        _ => None,
    }
}

/// BD16: bracket pairs as positions into the sequence, sorted by opening bracket.
fn bracket_pairs(chars: &[CharInfo], sequence: &IsolatedRunSequence) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    let mut stack: Vec<(usize, char)> = Vec::with_capacity(MAX_BRACKET_PAIRS);

    for (k, &i) in sequence.indices.iter().enumerate() {
        let c = &chars[i];
        if c.direction != BidiClass::ON {
            continue;
        }

        match c.bracket_type {
            BracketType::O => {
                if stack.len() == MAX_BRACKET_PAIRS {
                    break;
                }
                let opening = canonical_equivalent(c.code_point).unwrap_or(c.code_point);
                let closing = ucd::bidi_paired_bracket(opening)
                    .or_else(|| ucd::bidi_mirroring_glyph(opening))
                    .unwrap_or(opening);
                stack.push((k, closing));
            }
            BracketType::C => {
                let equivalent = canonical_equivalent(c.code_point);
                let found = stack
                    .iter()
                    .rposition(|&(_, closing)| closing == c.code_point || Some(closing) == equivalent);
                if let Some(depth) = found {
                    pairs.push((stack[depth].0, k));
                    stack.truncate(depth);
                }
            }
            BracketType::N => {}
        }
    }

    pairs.sort_unstable();
    pairs
}

/// Strong type for N0, with EN and AN counting as R.
fn n0_strong(direction: BidiClass) -> Option<BidiClass> {
    match direction {
        BidiClass::L => Some(BidiClass::L),
        BidiClass::R | BidiClass::EN | BidiClass::AN => Some(BidiClass::R),
        _ => None,
    }
}

fn rule_n0(chars: &mut [CharInfo], sequence: &IsolatedRunSequence, context: &BidiContext) {
    if !context.enable_mirrored_brackets {
        return;
    }

    let embedding_direction = sequence.embedding_direction();
    for (open, close) in bracket_pairs(chars, sequence) {
        let inside = &sequence.indices[open + 1..close];

        // N0 b, c: strong type matching the embedding direction wins.
        let mut pair_direction = None;
        for &i in inside {
            match n0_strong(chars[i].direction) {
                Some(direction) if direction == embedding_direction => {
                    pair_direction = Some(direction);
                    break;
                }
                Some(direction) => pair_direction = Some(direction),
                None => {}
            }
        }

        let Some(mut pair_direction) = pair_direction else {
            continue; // N0 d
        };

        if pair_direction != embedding_direction {
            // N0 c1, c2: look at the context before the opening bracket.
            let preceding = sequence.indices[..open]
                .iter()
                .rev()
                .find_map(|&i| n0_strong(chars[i].direction))
                .unwrap_or(sequence.sos);
            if preceding == embedding_direction {
                pair_direction = embedding_direction;
            }
        }

        for &k in &[open, close] {
            let i = sequence.indices[k];
            chars[i].direction = pair_direction;
        }

        // Marks following either bracket take its type.
        for &after in &[open, close] {
            for &i in &sequence.indices[after + 1..] {
                if chars[i].bidi_class != BidiClass::NSM {
                    break;
                }
                chars[i].direction = pair_direction;
            }
        }
    }
}

// N1, N2

fn n1_strong(direction: BidiClass) -> BidiClass {
    match direction {
        BidiClass::EN | BidiClass::AN => BidiClass::R,
        direction => direction,
    }
}

fn rule_n1(chars: &mut [CharInfo], sequence: &IsolatedRunSequence) {
    let mut direction_before = sequence.sos;
    let mut first_ni: Option<usize> = None;

    for (k, &i) in sequence.indices.iter().enumerate() {
        let direction = chars[i].direction;
        match first_ni {
            Some(start) if !direction.is_neutral_or_isolate() => {
                let direction_after = n1_strong(direction);
                if matches!(direction_before, BidiClass::L | BidiClass::R) && direction_before == direction_after {
                    for &j in &sequence.indices[start..k] {
                        chars[j].direction = direction_before;
                    }
                }
                first_ni = None;
                direction_before = direction_after;
            }
            Some(_) => {}
            None if direction.is_neutral_or_isolate() => first_ni = Some(k),
            None => direction_before = n1_strong(direction),
        }
    }

    if let Some(start) = first_ni {
        if direction_before == sequence.eos {
            for &j in &sequence.indices[start..] {
                chars[j].direction = direction_before;
            }
        }
    }
}

fn rule_n2(chars: &mut [CharInfo], sequence: &IsolatedRunSequence) {
    let embedding_direction = sequence.embedding_direction();
    for &i in &sequence.indices {
        if chars[i].direction.is_neutral_or_isolate() {
            chars[i].direction = embedding_direction;
        }
    }
}

fn rules_i1_i2(chars: &mut [CharInfo], sequence: &IsolatedRunSequence) {
    use BidiClass::*;

    for &i in &sequence.indices {
        let c = &mut chars[i];
        if c.embedding_level % 2 == 0 {
            match c.direction {
                R => c.embedding_level += 1,
                AN | EN => c.embedding_level += 2,
                _ => {}
            }
        } else if matches!(c.direction, L | AN | EN) {
            c.embedding_level += 1;
        }
    }
}

fn rule_x10(chars: &mut [CharInfo], paragraph_level: i8, context: &BidiContext) {
    let mut sequences = isolated_run_sequences(chars, level_runs(chars));

    // The W, N and I rules change levels that sos and eos are computed from.
    for sequence in &mut sequences {
        let (sos, eos) = sos_eos(chars, sequence, paragraph_level);
        sequence.sos = sos;
        sequence.eos = eos;
    }

    for sequence in &sequences {
        rule_w1(chars, sequence);
        rule_w2(chars, sequence);
        rule_w3(chars, sequence);
        rule_w4(chars, sequence);
        rule_w5(chars, sequence);
        rule_w6(chars, sequence);
        rule_w7(chars, sequence);
        rule_n0(chars, sequence, context);
        rule_n1(chars, sequence);
        rule_n2(chars, sequence);
        rules_i1_i2(chars, sequence);
    }
}

// L1, L2

/// L1 on one line; returns the lowest odd and the highest level.
fn rule_l1(line: &mut [CharInfo], paragraph_level: i8) -> (i8, i8) {
    use BidiClass::*;

    let mut lowest_odd = i8::MAX;
    let mut highest = paragraph_level;
    let mut preceding_is_segment = true;

    for c in line.iter_mut().rev() {
        if matches!(c.bidi_class, B | S) {
            c.embedding_level = paragraph_level;
            preceding_is_segment = true;
        } else if preceding_is_segment && (c.bidi_class == WS || c.bidi_class.is_isolate_formatter()) {
            c.embedding_level = paragraph_level;
        } else {
            highest = highest.max(c.embedding_level);
            if c.embedding_level % 2 == 1 {
                lowest_odd = lowest_odd.min(c.embedding_level);
            }
            preceding_is_segment = false;
        }
    }

    if paragraph_level % 2 == 1 {
        lowest_odd = lowest_odd.min(paragraph_level);
    }
    (lowest_odd, highest)
}

/// L2: reverse every run at or above each level, from the highest level
/// down to the lowest odd level.
fn rule_l2(line: &mut [CharInfo], lowest_odd: i8, highest: i8) {
    for level in (lowest_odd..=highest).rev() {
        let mut start: Option<usize> = None;
        for i in 0..=line.len() {
            let inside = i < line.len() && line[i].embedding_level >= level;
            match (start, inside) {
                (None, true) => start = Some(i),
                (Some(s), false) => {
                    line[s..i].reverse();
                    start = None;
                }
                _ => {}
            }
        }
    }
}

fn reorder_line(line: &mut [CharInfo], paragraph_level: i8) {
    let (lowest_odd, highest) = rule_l1(line, paragraph_level);
    rule_l2(line, lowest_odd, highest);
}

// P1

/// Run a single paragraph; returns the number of characters that survive X9
/// and the paragraph direction.
fn paragraph(chars: &mut Vec<CharInfo>, context: &BidiContext) -> (usize, Direction) {
    let paragraph_level = rule_p3(rule_p2(chars, context, false));

    rules_x1_x8(chars, paragraph_level, context);
    let len = rule_x9(chars);
    rule_x10(&mut chars[..len], paragraph_level, context);

    let kept = &mut chars[..len];
    let mut line_start = 0;
    for i in 0..kept.len() {
        if context.enable_line_separator && kept[i].is_line_separator() {
            reorder_line(&mut kept[line_start..=i], paragraph_level);
            line_start = i + 1;
        }
    }
    if line_start < kept.len() {
        reorder_line(&mut kept[line_start..], paragraph_level);
    }

    (len, Direction::from_level(paragraph_level))
}

/// P1: split into paragraphs and run each.
///
/// Returns all characters in their new order: the visual order of the kept
/// characters, followed by the removed ones in logical order.
fn rule_p1(chars: Vec<CharInfo>, context: &BidiContext) -> (Vec<CharInfo>, usize, Vec<Direction>) {
    let mut kept = Vec::with_capacity(chars.len());
    let mut removed = Vec::new();
    let mut directions = Vec::new();

    let mut current = Vec::new();
    let mut it = chars.into_iter().peekable();
    while let Some(c) = it.next() {
        let end_of_paragraph = c.direction == BidiClass::B;
        current.push(c);
        if end_of_paragraph || it.peek().is_none() {
            let (len, direction) = paragraph(&mut current, context);
            removed.extend(current.drain(len..));
            kept.append(&mut current);
            directions.push(direction);
        }
    }

    let len = kept.len();
    kept.append(&mut removed);
    (kept, len, directions)
}

/// Reorder `items` so that `items[i]` becomes the item previously at `order[i]`.
fn apply_permutation<T>(items: &mut [T], mut order: Vec<usize>) {
    debug_assert_eq!(items.len(), order.len());

    for start in 0..items.len() {
        let mut current = start;
        loop {
            let next = order[current];
            order[current] = current;
            if next == start || next == current {
                break;
            }
            items.swap(current, next);
            current = next;
        }
    }
}

/// Reorder `items` into visual order.
///
/// `get_code_point` returns the (starter) code point of an item;
/// `set_code_point` receives the mirrored glyph of brackets that end up
/// right-to-left, and `set_direction` the resolved direction of every kept
/// item.
///
/// Explicit directional controls and boundary-neutral characters are moved
/// behind the visual text. Returns the number of items in visual order and
/// the direction of each paragraph.
pub fn bidi<T>(
    items: &mut [T],
    get_code_point: impl Fn(&T) -> char,
    mut set_code_point: impl FnMut(&mut T, char),
    mut set_direction: impl FnMut(&mut T, Direction),
    context: &BidiContext,
) -> (usize, Vec<Direction>) {
    let chars = items.iter().enumerate().map(|(i, item)| CharInfo::new(i, get_code_point(item))).collect();
    let (chars, len, directions) = rule_p1(chars, context);

    apply_permutation(items, chars.iter().map(|c| c.index).collect());

    // L4
    for (item, c) in items.iter_mut().zip(&chars[..len]) {
        set_direction(item, Direction::from_level(c.embedding_level));
        if context.enable_mirrored_brackets && c.direction == BidiClass::R && c.bracket_type != BracketType::N {
            if let Some(mirrored) = ucd::bidi_mirroring_glyph(c.code_point) {
                set_code_point(item, mirrored);
            }
        }
    }

    (len, directions)
}

/// A character after reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidiChar {
    /// Position in the logical text.
    pub index: usize,
    /// The code point, mirrored where L4 applies.
    pub code_point: char,
    pub level: i8,
    pub direction: Direction,
}

/// Result of reordering a text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BidiReorder {
    /// The characters in visual order, without removed controls.
    pub visual: Vec<BidiChar>,
    pub paragraph_directions: Vec<Direction>,
}

impl BidiReorder {
    fn from_chars(chars: &[CharInfo], directions: Vec<Direction>, context: &BidiContext) -> Self {
        let visual = chars
            .iter()
            .map(|c| {
                let mirror = context.enable_mirrored_brackets
                    && c.direction == BidiClass::R
                    && c.bracket_type != BracketType::N;
                BidiChar {
                    index: c.index,
                    code_point: if mirror { ucd::bidi_mirroring_glyph(c.code_point).unwrap_or(c.code_point) } else { c.code_point },
                    level: c.embedding_level,
                    direction: Direction::from_level(c.embedding_level),
                }
            })
            .collect();
        Self { visual, paragraph_directions: directions }
    }

    /// Logical indices in visual order.
    pub fn order(&self) -> Vec<usize> {
        self.visual.iter().map(|c| c.index).collect()
    }

    /// Resolved levels in logical order, `None` for removed characters.
    pub fn levels(&self, len: usize) -> Vec<Option<i8>> {
        let mut r = vec![None; len];
        for c in &self.visual {
            if let Some(level) = r.get_mut(c.index) {
                *level = Some(c.level);
            }
        }
        r
    }
}

/// Reorder a text of code points.
pub fn reorder(text: &[char], context: &BidiContext) -> BidiReorder {
    let chars = text.iter().enumerate().map(|(i, &c)| CharInfo::new(i, c)).collect();
    let (chars, len, directions) = rule_p1(chars, context);
    BidiReorder::from_chars(&chars[..len], directions, context)
}

/// Reorder a sequence given only by bidi classes, as in the UCD bidi test data.
pub fn reorder_classes(classes: &[BidiClass], context: &BidiContext) -> BidiReorder {
    let chars = classes.iter().enumerate().map(|(i, &c)| CharInfo::from_class(i, c)).collect();
    let (chars, len, directions) = rule_p1(chars, context);
    BidiReorder::from_chars(&chars[..len], directions, context)
}

/// Direction of the first paragraph of `text` (P2, P3).
pub fn bidi_direction(text: &[char], context: &BidiContext) -> Direction {
    let end = text
        .iter()
        .position(|&c| ucd::bidi_class(c) == BidiClass::B)
        .map(|i| i + 1)
        .unwrap_or(text.len());
    let chars: Vec<CharInfo> = text[..end].iter().enumerate().map(|(i, &c)| CharInfo::new(i, c)).collect();
    Direction::from_level(rule_p3(rule_p2(&chars, context, false)))
}

/// Remove the characters that X9 would remove: embeddings, overrides, PDF and BN.
pub fn bidi_control_filter<T>(items: &mut Vec<T>, get_code_point: impl Fn(&T) -> char) {
    items.retain(|item| !ucd::bidi_class(get_code_point(item)).is_removed_by_x9());
}

#[cfg(test)]
mod tests {
    use super::*;
    use BidiClass::*;

    fn visual(s: &str, context: &BidiContext) -> String {
        let text: Vec<char> = s.chars().collect();
        reorder(&text, context).visual.iter().map(|c| c.code_point).collect()
    }

    #[test]
    fn left_to_right_is_identity() {
        let text: Vec<char> = "Hello, world (again).".chars().collect();
        let r = reorder(&text, &BidiContext::default());
        assert_eq!(r.order(), (0..text.len()).collect::<Vec<_>>());
        assert_eq!(r.paragraph_directions, vec![Direction::LeftToRight]);
    }

    #[test]
    fn mixed_paragraph() {
        let s = "abc \u{05D0}\u{05D1}\u{05D2}";
        assert_eq!(visual(s, &BidiContext::default()), "abc \u{05D2}\u{05D1}\u{05D0}");

        let text: Vec<char> = s.chars().collect();
        assert_eq!(bidi_direction(&text, &BidiContext::default()), Direction::LeftToRight);
    }

    #[test]
    fn right_to_left_paragraph() {
        let s = "\u{05D0}\u{05D1} abc";
        let text: Vec<char> = s.chars().collect();
        let r = reorder(&text, &BidiContext::default());
        assert_eq!(r.paragraph_directions, vec![Direction::RightToLeft]);
        assert_eq!(r.order(), vec![3, 4, 5, 2, 1, 0]);
    }

    #[test]
    fn mirrored_brackets() {
        let context = BidiContext { direction_mode: BidiDirectionMode::Rtl, ..BidiContext::default() };
        let text: Vec<char> = "(abc)".chars().collect();
        let r = reorder(&text, &context);
        assert_eq!(r.order(), vec![4, 1, 2, 3, 0]);
        let glyphs: String = r.visual.iter().map(|c| c.code_point).collect();
        assert_eq!(glyphs, "(abc)");
        assert_eq!(r.visual[0].direction, Direction::RightToLeft);

        let text: Vec<char> = "(\u{05D0})".chars().collect();
        let r = reorder(&text, &BidiContext::default());
        let glyphs: String = r.visual.iter().map(|c| c.code_point).collect();
        assert_eq!(glyphs, "(\u{05D0})");
        assert_eq!(r.order(), vec![2, 1, 0]);
    }

    #[test]
    fn numbers_stay_left_to_right() {
        let text: Vec<char> = "\u{05D0} 123 \u{05D1}".chars().collect();
        let r = reorder(&text, &BidiContext::default());
        assert_eq!(r.order(), vec![6, 5, 2, 3, 4, 1, 0]);
    }

    #[test]
    fn explicit_controls_are_removed() {
        let text: Vec<char> = "a\u{202B}b\u{202C}c".chars().collect();
        let r = reorder(&text, &BidiContext::default());
        assert_eq!(r.order(), vec![0, 2, 4]);
        assert_eq!(r.levels(text.len()), vec![Some(0), None, Some(2), None, Some(0)]);

        let mut items = text.clone();
        let (len, _) = bidi(&mut items, |c| *c, |c, m| *c = m, |_, _| {}, &BidiContext::default());
        assert_eq!(len, 3);
        assert_eq!(items, vec!['a', 'b', 'c', '\u{202B}', '\u{202C}']);

        let mut filtered = text;
        bidi_control_filter(&mut filtered, |c| *c);
        assert_eq!(filtered, vec!['a', 'b', 'c']);
    }

    #[test]
    fn paragraphs_have_their_own_direction() {
        let text: Vec<char> = "\u{05D0}\u{05D1}\u{2029}ab".chars().collect();
        let r = reorder(&text, &BidiContext::default());
        assert_eq!(r.paragraph_directions, vec![Direction::RightToLeft, Direction::LeftToRight]);
        assert_eq!(r.order(), vec![2, 1, 0, 3, 4]);
    }

    #[test]
    fn line_separator_splits_lines() {
        let context = BidiContext { direction_mode: BidiDirectionMode::Rtl, ..BidiContext::default() };
        let text: Vec<char> = "ab\u{2028}cd".chars().collect();
        assert_eq!(reorder(&text, &context).order(), vec![2, 0, 1, 3, 4]);

        let context = BidiContext { enable_line_separator: false, ..context };
        assert_eq!(reorder(&text, &context).order(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn isolates() {
        // L RLI R L PDI R with an LTR paragraph.
        let r = reorder_classes(&[L, RLI, R, L, PDI, R], &BidiContext::default());
        assert_eq!(r.levels(6), vec![Some(0), Some(0), Some(1), Some(2), Some(0), Some(1)]);
        assert_eq!(r.order(), vec![0, 1, 3, 2, 4, 5]);
    }

    #[test]
    fn weak_types() {
        let context = BidiContext { direction_mode: BidiDirectionMode::Ltr, ..BidiContext::default() };
        // AL EN becomes R AN.
        let r = reorder_classes(&[AL, EN], &context);
        assert_eq!(r.levels(2), vec![Some(1), Some(2)]);
        // EN CS EN stays one number.
        let r = reorder_classes(&[R, EN, CS, EN], &context);
        assert_eq!(r.levels(4), vec![Some(1), Some(2), Some(2), Some(2)]);
    }

    #[test]
    fn permutation_in_place() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        apply_permutation(&mut items, vec![4, 0, 3, 1, 2]);
        assert_eq!(items, vec!['e', 'a', 'd', 'b', 'c']);
    }

    #[test]
    fn empty() {
        let r = reorder(&[], &BidiContext::default());
        assert!(r.visual.is_empty());
        assert!(r.paragraph_directions.is_empty());
    }
}
