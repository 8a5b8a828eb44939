pub mod instapay;
