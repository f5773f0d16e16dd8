pub mod audit_inventory_cmd;
pub mod checkout_book_cmd;
pub mod return_book_cmd;
