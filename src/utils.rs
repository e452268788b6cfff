pub mod count_frequencies;
pub use count_frequencies::count_frequencies;

pub mod decompress_gzip;
pub use decompress_gzip::decompress_gzip_to_string;

pub mod is_plain_ascii;
pub use is_plain_ascii::is_plain_ascii;

pub mod lexical_attributes;

pub mod read_organization_list;
pub use read_organization_list::read_organization_list_from_string;
