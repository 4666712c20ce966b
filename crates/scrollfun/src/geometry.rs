use scrollfun_core::Host;

/// Position of an element relative to the document origin
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub top: f64,
    pub left: f64,
}

/// Cumulative offset of `element`, summed up its positioning-parent chain
pub fn document_offset<H: Host>(host: &H, element: &H::Element) -> Offset {
    let mut offset = Offset::default();
    let mut current = Some(element.clone());

    while let Some(el) = current {
        offset.top += host.offset_top(&el);
        offset.left += host.offset_left(&el);
        current = host.offset_parent(&el);
    }

    offset
}
