//! Test helpers for writing datasets into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

const HEADER: &str =
    "business_id,name,address,city,state,stars,review_count,is_open,attributes,categories\n";
const AMENITIES: &str = concat!(
    "\"{'GoodForKids': 'True', 'BusinessAcceptsCreditCards': 'True', ",
    "'OutdoorSeating': 'True'}\"",
);

/// A temporary directory with a UTF-8 path.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = match TempDir::new() {
        Ok(tmp) => tmp,
        Err(err) => panic!("create temporary directory: {err}"),
    };
    let root = match Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()) {
        Ok(root) => root,
        Err(path) => panic!("temporary path is not UTF-8: {path:?}"),
    };
    (tmp, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Err(err) = std::fs::write(path, contents) {
        panic!("write {path}: {err}");
    }
}

/// Three open restaurants in two cities plus one closed business.
pub(super) fn sample_dataset() -> String {
    [
        HEADER.to_owned(),
        format!(
            "b1,Sushi Zen,1 State St,Santa Barbara,CA,4.5,200,1,{AMENITIES},\
             \"Sushi Bars, Japanese, Restaurants\"\n"
        ),
        "b2,Roll House,2 State St,Santa Barbara,CA,4.0,80,1,\"{'GoodForKids': 'True'}\",\
         \"Sushi Bars, Restaurants\"\n"
            .to_owned(),
        format!(
            "b3,Golden Dim Sum,3 Race St,Philadelphia,PA,4.0,500,1,{AMENITIES},\
             \"Dim Sum, Chinese, Restaurants\"\n"
        ),
        "b4,Closed Sushi,4 Race St,Philadelphia,PA,5.0,999,0,,\"Sushi Bars, Restaurants\"\n"
            .to_owned(),
    ]
    .concat()
}
