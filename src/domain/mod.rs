// Domain layer: the element bound and the codec port. Concrete codecs live in adapters.

pub mod ports;
