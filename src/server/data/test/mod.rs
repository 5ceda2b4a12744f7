mod auction;
mod event;
mod ledger;
mod participation;
