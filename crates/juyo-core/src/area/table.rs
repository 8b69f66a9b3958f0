//! The per-area policy table.

use super::{Area, AreaSpec, DeliveryMode};
use crate::decode::UntrustedEncodingPolicy;
use crate::normalize::CleaningMode;

static HOKKAIDO: AreaSpec = AreaSpec {
    area: Area::Hokkaido,
    base_url: "https://denkiyoho.hepco.co.jp/",
    delivery: DeliveryMode::QuarterlyZipViaHtmlLookup {
        page: "area_download.html",
    },
    cleaning: CleaningMode::StripAllBlankLines,
    untrusted_encoding: UntrustedEncodingPolicy::Decode,
    category: "juyo",
    short_code: "hok",
};

static TOHOKU: AreaSpec = AreaSpec {
    area: Area::Tohoku,
    base_url: "https://setsuden.nw.tohoku-epco.co.jp/",
    delivery: DeliveryMode::DirectCsvByYear {
        path: "common/demand/",
    },
    cleaning: CleaningMode::StripAllBlankLines,
    untrusted_encoding: UntrustedEncodingPolicy::Decode,
    category: "juyo",
    short_code: "toh",
};

// Tokyo CSVs separate sections with runs of blank lines, so only isolated
// blanks are dropped, and members we cannot trust to decode are kept raw.
static TOKYO: AreaSpec = AreaSpec {
    area: Area::Tokyo,
    base_url: "https://www.tepco.co.jp/forecast/",
    delivery: DeliveryMode::MonthlyZip {
        path: "html/images/",
    },
    cleaning: CleaningMode::CollapseSingleBlankLines,
    untrusted_encoding: UntrustedEncodingPolicy::PassThrough,
    category: "juyo",
    short_code: "tok",
};

static CHUBU: AreaSpec = AreaSpec {
    area: Area::Chubu,
    base_url: "https://powergrid.chuden.co.jp/denkiyoho/",
    delivery: DeliveryMode::MonthlyZip {
        path: "/denki_yoho_content_data/download_csv/",
    },
    cleaning: CleaningMode::StripAllBlankLines,
    untrusted_encoding: UntrustedEncodingPolicy::Decode,
    category: "juyo",
    short_code: "chb",
};

static HOKURIKU: AreaSpec = AreaSpec {
    area: Area::Hokuriku,
    base_url: "https://www.rikuden.co.jp/nw/denki-yoho/csv/",
    delivery: DeliveryMode::DirectCsvByDate,
    cleaning: CleaningMode::StripAllBlankLines,
    untrusted_encoding: UntrustedEncodingPolicy::Decode,
    category: "hrk",
    short_code: "hrk",
};

pub(super) fn spec_for(area: Area) -> &'static AreaSpec {
    match area {
        Area::Hokkaido => &HOKKAIDO,
        Area::Tohoku => &TOHOKU,
        Area::Tokyo => &TOKYO,
        Area::Chubu => &CHUBU,
        Area::Hokuriku => &HOKURIKU,
    }
}
