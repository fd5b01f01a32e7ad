use crate::graph::NodeId;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Display label for a node, a pure function of its creation order.
///
/// Bijective base-26: `A`..`Z`, then `AA`, `AB`, ... `ZZ`, `AAA`.
pub fn label_for(id: NodeId) -> String {
    let mut n = id.index() + 1;
    let mut out = Vec::new();
    while n > 0 {
        n -= 1;
        out.push(ALPHABET[n % 26]);
        n /= 26;
    }
    out.iter().rev().map(|&b| b as char).collect()
}
