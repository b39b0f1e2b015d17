use itertools::Itertools;

use crate::sequence::Sequence;

/// Host-environment reflection capability. The helpers below never reflect on
/// anything themselves; they drive whatever implementation the caller injects
/// and propagate its failures unchanged.
pub trait Reflector {
    type Obj;
    type Value;
    type Error;

    fn read_property(&self, obj: &Self::Obj, path: &str) -> Result<Self::Value, Self::Error>;
    fn write_property(
        &self,
        obj: &mut Self::Obj,
        path: &str,
        value: Self::Value,
    ) -> Result<(), Self::Error>;
    fn invoke(&self, method: &str, arg: &Self::Obj) -> Result<Self::Value, Self::Error>;
    fn construct(&self, arg: Self::Value) -> Result<Self::Obj, Self::Error>;
}

/// One property value per object, in order. The first failed read aborts the
/// whole collection.
pub fn from_property<'a, R: Reflector>(
    reflector: &R,
    path: &str,
    objs: impl IntoIterator<Item = &'a R::Obj>,
) -> Result<Sequence<R::Value>, R::Error>
where
    R::Obj: 'a,
{
    objs.into_iter()
        .map(|obj| reflector.read_property(obj, path))
        .try_collect()
}

/// Writes the value into the named property of every element, front to back.
pub fn set_property<R: Reflector>(
    reflector: &R,
    path: &str,
    objs: &mut Sequence<R::Obj>,
    value: R::Value,
) -> Result<(), R::Error>
where
    R::Obj: Clone,
    R::Value: Clone,
{
    for obj in objs.iter_mut() {
        reflector.write_property(obj, path, value.clone())?;
    }
    Ok(())
}

/// Dispatches the named method once per object, collecting results in order.
pub fn invoke_each<'a, R: Reflector>(
    reflector: &R,
    method: &str,
    objs: impl IntoIterator<Item = &'a R::Obj>,
) -> Result<Sequence<R::Value>, R::Error>
where
    R::Obj: 'a,
{
    objs.into_iter()
        .map(|obj| reflector.invoke(method, obj))
        .try_collect()
}

/// One constructed wrapper per element, in order. A factory failure on any
/// element propagates immediately; no partial sequence survives.
pub fn wrap<R: Reflector>(
    reflector: &R,
    values: impl IntoIterator<Item = R::Value>,
) -> Result<Sequence<R::Obj>, R::Error> {
    values
        .into_iter()
        .map(|value| reflector.construct(value))
        .try_collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Sequence;

    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        x: i64,
        y: i64,
    }

    struct PointReflector;

    impl Reflector for PointReflector {
        type Obj = Point;
        type Value = i64;
        type Error = String;

        fn read_property(&self, obj: &Point, path: &str) -> Result<i64, String> {
            match path {
                "x" => Ok(obj.x),
                "y" => Ok(obj.y),
                _ => Err(format!("no property {path}")),
            }
        }

        fn write_property(&self, obj: &mut Point, path: &str, value: i64) -> Result<(), String> {
            match path {
                "x" => obj.x = value,
                "y" => obj.y = value,
                _ => return Err(format!("no property {path}")),
            }
            Ok(())
        }

        fn invoke(&self, method: &str, arg: &Point) -> Result<i64, String> {
            match method {
                "sum" => Ok(arg.x + arg.y),
                _ => Err(format!("no method {method}")),
            }
        }

        fn construct(&self, arg: i64) -> Result<Point, String> {
            if arg < 0 {
                return Err("cannot build from a negative".to_string());
            }
            Ok(Point { x: arg, y: 0 })
        }
    }

    fn points() -> Vec<Point> {
        vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }, Point { x: 5, y: 6 }]
    }

    #[test]
    fn test_from_property() {
        let xs = from_property(&PointReflector, "x", &points()).unwrap();
        assert_eq!(xs.to_vec(), vec![1, 3, 5]);
        let ys = from_property(&PointReflector, "y", &points()).unwrap();
        assert_eq!(ys.to_vec(), vec![2, 4, 6]);
    }

    #[test]
    fn test_from_property_propagates() {
        let err = from_property(&PointReflector, "z", &points()).unwrap_err();
        assert_eq!(err, "no property z");
    }

    #[test]
    fn test_set_property() {
        let mut seq = Sequence::from_vec(points());
        set_property(&PointReflector, "y", &mut seq, 0).unwrap();
        assert_eq!(
            seq.to_vec(),
            vec![Point { x: 1, y: 0 }, Point { x: 3, y: 0 }, Point { x: 5, y: 0 }]
        );
    }

    #[test]
    fn test_invoke_each() {
        let sums = invoke_each(&PointReflector, "sum", &points()).unwrap();
        assert_eq!(sums.to_vec(), vec![3, 7, 11]);
        let err = invoke_each(&PointReflector, "norm", &points()).unwrap_err();
        assert_eq!(err, "no method norm");
    }

    #[test]
    fn test_wrap() {
        let wrapped = wrap(&PointReflector, vec![1, 2]).unwrap();
        assert_eq!(
            wrapped.to_vec(),
            vec![Point { x: 1, y: 0 }, Point { x: 2, y: 0 }]
        );
    }

    #[test]
    fn test_wrap_propagates_factory_failure() {
        let err = wrap(&PointReflector, vec![1, -2, 3]).unwrap_err();
        assert_eq!(err, "cannot build from a negative");
    }
}
