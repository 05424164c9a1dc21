/// Computes the broadcast shape of several array shapes.
///
/// Shapes are aligned on their trailing axes. Each axis must either match
/// or have length one. Returns `None` if the shapes are incompatible.
pub(super) fn broadcast_shape(shapes: &[&[usize]]) -> Option<Vec<usize>> {
    let ndim = shapes.iter().map(|shape| shape.len()).max().unwrap_or(0);
    let mut out = vec![1; ndim];

    for shape in shapes {
        let offset = ndim - shape.len();
        for (axis, &len) in shape.iter().enumerate() {
            let slot = &mut out[offset + axis];
            if *slot == 1 {
                *slot = len;
            } else if len != 1 && len != *slot {
                return None;
            }
        }
    }

    Some(out)
}
