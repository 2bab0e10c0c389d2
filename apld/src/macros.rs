/// Declares a facet struct and its [`crate::facet::Facet`] impl.
///
/// ```ignore
/// crate::facet! {
/// 	pub struct TombstoneEntity as "Tombstone" : ObjectEntity {
/// 		former_type: Option<String> = "formerType",
/// 		deleted: Option<DateTime<Utc>> = "deleted",
/// 	}
/// }
/// ```
///
/// `as` gives the vocabulary name, `shadows` overrides the hidden base name (defaults to the
/// first parent's name), parents after `:` form the lineage. Fields marked `always` are written
/// as `null` when empty. Optional trailing `context { .. }` and `narrow(obj) { .. }` blocks
/// override the matching trait methods.
macro_rules! facet {
	(@opt) => { None };
	(@opt $x:literal) => { Some($x) };

	(@always) => { false };
	(@always always) => { true };

	(@base $base:literal ; $($parent:ty),*) => { Some($base) };
	(@base ;) => { None };
	(@base ; $first:ty $(, $rest:ty)*) => { <$first as $crate::facet::Facet>::TYPE_NAME };

	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident $(as $tname:literal)? $(shadows $base:literal)? $(: $($parent:ty),+)? {
			$(
				$(#[$fmeta:meta])*
				$field:ident : $fty:ty = $key:literal $($always:ident)?
			),* $(,)?
		}
		$(context $ctx:block)?
		$(narrow($obj:ident) $narrow:block)?
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Default, PartialEq)]
		$vis struct $name {
			$(
				$(#[$fmeta])*
				pub $field: $fty,
			)*
		}

		impl $crate::facet::Facet for $name {
			const TYPE_NAME: Option<&'static str> = $crate::facet!(@opt $($tname)?);
			const BASE_TYPE: Option<&'static str> = $crate::facet!(@base $($base)? ; $($($parent),+)?);

			fn lineage() -> Vec<$crate::facet::FacetKind> {
				vec![$($($crate::facet::FacetKind::of::<$parent>()),+)?]
			}

			#[allow(unused_variables)]
			fn recognizes(member: &str) -> bool {
				false $(|| <$fty as $crate::member::Member>::recognizes($key, member))*
			}

			#[allow(unused_variables)]
			fn read(object: &$crate::facet::JsonObject, cx: &$crate::converter::Decoder<'_>) -> $crate::error::ConvertResult<Self> {
				Ok($name {
					$($field: <$fty as $crate::member::Member>::read(object, $key, cx)?,)*
				})
			}

			#[allow(unused_variables)]
			fn write(&self, out: &mut $crate::facet::JsonObject, cx: &$crate::converter::Encoder<'_>) {
				$(
					$crate::member::Member::write(&self.$field, out, $key, cx, $crate::facet!(@always $($always)?));
				)*
			}

			fn requires_full_form(&self) -> bool {
				false $(|| $crate::member::Member::is_populated(&self.$field))*
			}

			$(
				fn context() -> $crate::context::JsonLdContext $ctx
			)?

			$(
				fn narrow($obj: &$crate::facet::JsonObject) -> Option<$crate::facet::FacetKind> $narrow
			)?
		}
	};
}

pub(crate) use facet;

/// Façade getter: reads a field off a facet, `Err(FieldErr(name))` when the facet is missing
/// or the field is empty.
macro_rules! getter {
	($name:ident -> $t:ty = $facet:ident . $field:ident) => {
		fn $name(&self) -> $crate::Field<$t> {
			self.get::<$facet>()
				.and_then(|x| $crate::member::Getter::<$t>::field(&x.$field))
				.ok_or($crate::FieldErr(stringify!($name)))
		}
	};
}

pub(crate) use getter;

/// Façade setter: creates the facet (and its lineage) when missing.
macro_rules! setter {
	($name:ident -> $t:ty = $facet:ident . $field:ident) => {
		paste::item! {
			fn [< set_$name >](mut self, val: $t) -> Self {
				$crate::member::Setter::<$t>::assign(&mut self.get_or_create::<$facet>().$field, val);
				self
			}
		}
	};
}

pub(crate) use setter;
