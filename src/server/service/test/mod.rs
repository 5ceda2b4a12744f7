mod auction;
mod event;
mod ledger;
mod roster;
