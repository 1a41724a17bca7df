/// Reading and writing of the `ENTITIES` section of DXF drawings
pub mod dxf;

/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for converting drawings into internal representations
pub mod import;

/// All logic for exporting internal representations into drawings and external representations
pub mod export;

/// All logic for creating SVG from [`Layout`](crate::entities::Layout)s
pub mod svg;
