/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 29/8/26
******************************************************************************/

//! Built-in semantic table for well-known FIX tags.
//!
//! A data-driven static table mapping tag numbers to pure value→label
//! functions, used when the specification carries no enum table for a
//! field. Unrecognized values yield `None` and the caller falls back to
//! the raw value.

/// A pure mapping from a coded field value to a human-readable label.
pub type SemanticFn = fn(&str) -> Option<&'static str>;

/// The built-in semantic table.
///
/// Covers the well-known enumerated tags; every other tag passes its value
/// through unannotated.
pub const BUILTIN_SEMANTICS: [(u32, SemanticFn); 18] = [
    (22, security_id_source),
    (35, msg_type),
    (39, ord_status),
    (40, ord_type),
    (54, side),
    (59, time_in_force),
    (63, settl_type),
    (71, alloc_trans_type),
    (98, encrypt_method),
    (102, cxl_rej_reason),
    (103, ord_rej_reason),
    (150, exec_type),
    (167, security_type),
    (201, put_or_call),
    (269, md_entry_type),
    (373, session_reject_reason),
    (447, party_id_source),
    (461, cfi_code),
];

/// Looks up the built-in label for a tag/value pair.
#[must_use]
pub fn lookup(tag: u32, value: &str) -> Option<&'static str> {
    BUILTIN_SEMANTICS
        .iter()
        .find(|(t, _)| *t == tag)
        .and_then(|(_, f)| f(value))
}

fn msg_type(value: &str) -> Option<&'static str> {
    Some(match value {
        "0" => "Heartbeat",
        "1" => "Test Request",
        "2" => "Resend Request",
        "3" => "Reject",
        "4" => "Sequence Reset",
        "5" => "Logout",
        "6" => "Indication of Interest",
        "7" => "Advertisement",
        "8" => "Execution Report",
        "9" => "Order Cancel Reject",
        "A" => "Logon",
        "B" => "News",
        "C" => "Email",
        "D" => "New Order Single",
        "E" => "New Order List",
        "F" => "Order Cancel Request",
        "G" => "Order Cancel/Replace Request",
        "H" => "Order Status Request",
        "J" => "Allocation Instruction",
        "V" => "Market Data Request",
        "W" => "Market Data Snapshot/Full Refresh",
        "X" => "Market Data Incremental Refresh",
        "Y" => "Market Data Request Reject",
        "AD" => "Trade Capture Report Request",
        "AE" => "Trade Capture Report",
        _ => return None,
    })
}

fn ord_status(value: &str) -> Option<&'static str> {
    Some(match value {
        "0" => "New",
        "1" => "Partially filled",
        "2" => "Filled",
        "3" => "Done for day",
        "4" => "Canceled",
        "5" => "Replaced",
        "6" => "Pending Cancel",
        "7" => "Stopped",
        "8" => "Rejected",
        "9" => "Suspended",
        "A" => "Pending New",
        "B" => "Calculated",
        "C" => "Expired",
        "D" => "Accepted for Bidding",
        "E" => "Pending Replace",
        _ => return None,
    })
}

fn ord_type(value: &str) -> Option<&'static str> {
    Some(match value {
        "1" => "Market",
        "2" => "Limit",
        "3" => "Stop",
        "4" => "Stop Limit",
        "5" => "Market On Close",
        "6" => "With Or Without",
        "7" => "Limit Or Better",
        "8" => "Limit With Or Without",
        "9" => "On Basis",
        "P" => "Pegged",
        _ => return None,
    })
}

fn side(value: &str) -> Option<&'static str> {
    Some(match value {
        "1" => "Buy",
        "2" => "Sell",
        "3" => "Buy Minus",
        "4" => "Sell Plus",
        "5" => "Sell Short",
        "6" => "Sell Short Exempt",
        "7" => "Undisclosed",
        "8" => "Cross",
        "9" => "Cross Short",
        _ => return None,
    })
}

fn time_in_force(value: &str) -> Option<&'static str> {
    Some(match value {
        "0" => "Day",
        "1" => "Good Till Cancel",
        "2" => "At The Opening",
        "3" => "Immediate Or Cancel",
        "4" => "Fill Or Kill",
        "5" => "Good Till Crossing",
        "6" => "Good Till Date",
        "7" => "At The Close",
        _ => return None,
    })
}

fn exec_type(value: &str) -> Option<&'static str> {
    Some(match value {
        "0" => "New",
        "1" => "Partial Fill",
        "2" => "Fill",
        "3" => "Done For Day",
        "4" => "Canceled",
        "5" => "Replaced",
        "6" => "Pending Cancel",
        "7" => "Stopped",
        "8" => "Rejected",
        "9" => "Suspended",
        "A" => "Pending New",
        "B" => "Calculated",
        "C" => "Expired",
        "D" => "Restated",
        "E" => "Pending Replace",
        "F" => "Trade",
        "G" => "Trade Correct",
        "H" => "Trade Cancel",
        "I" => "Order Status",
        _ => return None,
    })
}

fn security_id_source(value: &str) -> Option<&'static str> {
    Some(match value {
        "1" => "CUSIP",
        "2" => "SEDOL",
        "3" => "QUIK",
        "4" => "ISIN",
        "5" => "RIC",
        "6" => "ISO Currency Code",
        "7" => "ISO Country Code",
        "8" => "Exchange Symbol",
        "9" => "CTA",
        _ => return None,
    })
}

fn settl_type(value: &str) -> Option<&'static str> {
    Some(match value {
        "0" => "Regular",
        "1" => "Cash",
        "2" => "Next Day",
        "3" => "T+2",
        "4" => "T+3",
        "5" => "T+4",
        "6" => "Future",
        "7" => "When And If Issued",
        "8" => "Sellers Option",
        "9" => "T+5",
        _ => return None,
    })
}

fn alloc_trans_type(value: &str) -> Option<&'static str> {
    Some(match value {
        "0" => "New",
        "1" => "Replace",
        "2" => "Cancel",
        "3" => "Preliminary",
        "4" => "Calculated",
        "5" => "Calculated Without Preliminary",
        _ => return None,
    })
}

fn encrypt_method(value: &str) -> Option<&'static str> {
    Some(match value {
        "0" => "None",
        "1" => "PKCS",
        "2" => "DES",
        "3" => "PKCS/DES",
        "4" => "PGP/DES",
        "5" => "PGP/DES-MD5",
        "6" => "PEM/DES-MD5",
        _ => return None,
    })
}

fn cxl_rej_reason(value: &str) -> Option<&'static str> {
    Some(match value {
        "0" => "Too late to cancel",
        "1" => "Unknown order",
        "2" => "Broker/Exchange option",
        "3" => "Order already in pending status",
        "4" => "Unable to process mass cancel request",
        "5" => "OrigOrdModTime did not match",
        "6" => "Duplicate ClOrdID",
        _ => return None,
    })
}

fn ord_rej_reason(value: &str) -> Option<&'static str> {
    Some(match value {
        "0" => "Broker/Exchange option",
        "1" => "Unknown symbol",
        "2" => "Exchange closed",
        "3" => "Order exceeds limit",
        "4" => "Too late to enter",
        "5" => "Unknown order",
        "6" => "Duplicate order",
        "7" => "Duplicate of verbally communicated order",
        "8" => "Stale order",
        _ => return None,
    })
}

fn security_type(value: &str) -> Option<&'static str> {
    Some(match value {
        "CS" => "Common Stock",
        "PS" => "Preferred Stock",
        "FUT" => "Future",
        "OPT" => "Option",
        "WAR" => "Warrant",
        "CORP" => "Corporate Bond",
        "GOVT" => "Government Bond",
        "MUNI" => "Municipal Bond",
        "MLEG" => "Multileg Instrument",
        "CASH" => "Cash",
        _ => return None,
    })
}

fn put_or_call(value: &str) -> Option<&'static str> {
    Some(match value {
        "0" => "Put",
        "1" => "Call",
        _ => return None,
    })
}

fn md_entry_type(value: &str) -> Option<&'static str> {
    Some(match value {
        "0" => "Bid",
        "1" => "Offer",
        "2" => "Trade",
        "3" => "Index Value",
        "4" => "Opening Price",
        "5" => "Closing Price",
        "6" => "Settlement Price",
        "7" => "Trading Session High Price",
        "8" => "Trading Session Low Price",
        "9" => "Trading Session VWAP Price",
        _ => return None,
    })
}

fn session_reject_reason(value: &str) -> Option<&'static str> {
    Some(match value {
        "0" => "Invalid tag number",
        "1" => "Required tag missing",
        "2" => "Tag not defined for this message type",
        "3" => "Undefined tag",
        "4" => "Tag specified without a value",
        "5" => "Value is incorrect for this tag",
        "6" => "Incorrect data format for value",
        "7" => "Decryption problem",
        "8" => "Signature problem",
        "9" => "CompID problem",
        "10" => "SendingTime accuracy problem",
        "11" => "Invalid MsgType",
        _ => return None,
    })
}

fn party_id_source(value: &str) -> Option<&'static str> {
    Some(match value {
        "B" => "BIC",
        "C" => "Generally accepted market participant identifier",
        "D" => "Proprietary/Custom code",
        "E" => "ISO Country Code",
        "F" => "Settlement entity location",
        "G" => "MIC",
        "H" => "CSD participant/member code",
        _ => return None,
    })
}

/// CFI codes (ISO 10962) classify by category letter rather than full
/// enumeration.
fn cfi_code(value: &str) -> Option<&'static str> {
    Some(match value.chars().next()? {
        'E' => "Equity",
        'D' => "Debt Instrument",
        'R' => "Entitlement (Right)",
        'O' => "Option",
        'F' => "Future",
        'S' => "Swap",
        'M' => "Miscellaneous",
        _ => return None,
    })
}
