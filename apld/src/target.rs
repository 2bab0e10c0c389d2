use crate::{model::Object, LinkableSlice};

pub const PUBLIC : &str = "https://www.w3.org/ns/activitystreams#Public";

pub trait Addressed {
	/// every recipient: to, bto, cc and bcc
	fn addressed(&self) -> Vec<String>;
	/// primary recipients only: to and bto
	fn mentioning(&self) -> Vec<String>;
	fn is_public(&self) -> bool {
		self.addressed().iter().any(|x| x == PUBLIC)
	}
}

impl<T: Object> Addressed for T {
	fn addressed(&self) -> Vec<String> {
		let mut to = self.mentioning();
		to.append(&mut self.cc().map(|x| x.all_ids()).unwrap_or_default());
		to.append(&mut self.bcc().map(|x| x.all_ids()).unwrap_or_default());
		to
	}

	fn mentioning(&self) -> Vec<String> {
		let mut to : Vec<String> = self.to().map(|x| x.all_ids()).unwrap_or_default();
		to.append(&mut self.bto().map(|x| x.all_ids()).unwrap_or_default());
		to
	}
}

#[cfg(test)]
mod test {
	use super::Addressed;
	use crate::{vocab, Config, Converter};

	fn note() -> serde_json::Value {
		serde_json::json!({
			"id": "http://localhost:8080/obj/1",
			"type": "Note",
			"content": "hello world!",
			"published": "2024-06-04T17:09:20+00:00",
			"to": ["http://localhost:8080/usr/root/followers"],
			"bto": ["https://localhost:8080/usr/secret"],
			"cc": [crate::target::PUBLIC],
			"bcc": [],
		})
	}

	#[test]
	fn addressed_trait_finds_all_targets() {
		let registry = vocab::registry().unwrap();
		let obj = Converter::new(&registry, Config::default()).read_value(&note()).unwrap();

		assert_eq!(
			obj.addressed(),
			vec![
				"http://localhost:8080/usr/root/followers".to_string(),
				"https://localhost:8080/usr/secret".to_string(),
				crate::target::PUBLIC.to_string(),
			]
		);
		assert!(obj.is_public());
	}

	#[test]
	fn primary_targets_only_finds_to_and_bto() {
		let registry = vocab::registry().unwrap();
		let obj = Converter::new(&registry, Config::default()).read_value(&note()).unwrap();

		assert_eq!(
			obj.mentioning(),
			vec![
				"http://localhost:8080/usr/root/followers".to_string(),
				"https://localhost:8080/usr/secret".to_string(),
			]
		);
	}
}
