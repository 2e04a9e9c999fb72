#[cfg(test)]
mod determinization;
#[cfg(test)]
mod language;

/// Enumerates every string over `alphabet` of length `0..=max_len`.
#[cfg(test)]
pub(crate) fn strings_up_to(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];

    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |c| {
                    let mut next = prefix.clone();
                    next.push(*c);
                    next
                })
            })
            .collect();
        all.extend(frontier.iter().cloned());
    }

    all
}
